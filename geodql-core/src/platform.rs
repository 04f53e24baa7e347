//! Database platform identifiers and per-function allow-lists.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::error::{GeoDqlError, Result};

pub const POSTGRESQL: &str = "postgresql";
pub const MYSQL: &str = "mysql";
pub const SQLITE: &str = "sqlite";

/// What an allow-list with no declared platforms permits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyAllowList {
    /// No declaration means no restriction.
    #[default]
    AllowAll,
    /// A function must name at least one platform to be renderable.
    DenyAll,
}

/// Platforms a function may be rendered for. Matching is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    platforms: BTreeSet<String>,
    when_empty: EmptyAllowList,
}

impl AllowList {
    /// An empty list under the default [`EmptyAllowList::AllowAll`] policy.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// # Example
    ///
    /// ```
    /// use geodql_core::AllowList;
    /// use geodql_core::platform::{MYSQL, POSTGRESQL};
    ///
    /// let list = AllowList::new([POSTGRESQL]);
    /// assert!(list.check(POSTGRESQL).is_ok());
    /// assert!(list.check(MYSQL).is_err());
    /// ```
    pub fn new<I, S>(platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            platforms: platforms.into_iter().map(Into::into).collect(),
            when_empty: EmptyAllowList::default(),
        }
    }

    pub fn with_empty_policy(mut self, when_empty: EmptyAllowList) -> Self {
        self.when_empty = when_empty;
        self
    }

    pub fn empty_policy(&self) -> EmptyAllowList {
        self.when_empty
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().map(String::as_str)
    }

    pub fn permits(&self, platform: &str) -> bool {
        if self.platforms.is_empty() {
            return self.when_empty == EmptyAllowList::AllowAll;
        }
        self.platforms.contains(platform)
    }

    pub fn check(&self, platform: &str) -> Result<()> {
        if self.permits(platform) {
            Ok(())
        } else {
            Err(GeoDqlError::UnsupportedPlatform(platform.to_string()))
        }
    }
}
