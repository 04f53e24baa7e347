//! Argument-count bounds for function definitions.

use std::fmt;

use crate::error::{GeoDqlError, Result};

/// Upper bound on the number of arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxArgs {
    Bounded(usize),
    Unbounded,
}

impl From<Option<usize>> for MaxArgs {
    fn from(max: Option<usize>) -> Self {
        max.map_or(MaxArgs::Unbounded, MaxArgs::Bounded)
    }
}

/// Inclusive `min..=max` argument bounds.
///
/// Parsing always reads a first argument, so `min` is at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgumentBounds {
    min: usize,
    max: MaxArgs,
}

impl ArgumentBounds {
    /// # Example
    ///
    /// ```
    /// use geodql_core::{ArgumentBounds, MaxArgs};
    ///
    /// assert!(ArgumentBounds::new(2, MaxArgs::Bounded(3)).is_ok());
    /// assert!(ArgumentBounds::new(0, MaxArgs::Unbounded).is_err());
    /// assert!(ArgumentBounds::new(3, MaxArgs::Bounded(2)).is_err());
    /// ```
    pub fn new(min: usize, max: MaxArgs) -> Result<Self> {
        if min == 0 {
            return Err(GeoDqlError::InvalidDefinition(
                "functions take at least one argument".to_string(),
            ));
        }
        if let MaxArgs::Bounded(max) = max {
            if max < min {
                return Err(GeoDqlError::InvalidDefinition(format!(
                    "maximum argument count {max} is below minimum {min}"
                )));
            }
        }
        Ok(Self { min, max })
    }

    pub fn exactly(n: usize) -> Result<Self> {
        Self::new(n, MaxArgs::Bounded(n))
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> MaxArgs {
        self.max
    }

    /// True while `count` arguments leave a mandatory argument outstanding.
    pub fn requires_more(&self, count: usize) -> bool {
        count < self.min
    }

    /// True if another argument may follow `count` already parsed ones.
    pub fn allows_more(&self, count: usize) -> bool {
        match self.max {
            MaxArgs::Bounded(max) => count < max,
            MaxArgs::Unbounded => true,
        }
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min
            && match self.max {
                MaxArgs::Bounded(max) => count <= max,
                MaxArgs::Unbounded => true,
            }
    }
}

impl fmt::Display for ArgumentBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            MaxArgs::Bounded(max) if max == self.min => write!(f, "{max}"),
            MaxArgs::Bounded(max) => write!(f, "{}..={max}", self.min),
            MaxArgs::Unbounded => write!(f, "{}..", self.min),
        }
    }
}
