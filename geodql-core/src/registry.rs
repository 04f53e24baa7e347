//! Name → definition mapping handed to the host query compiler.
//!
//! Query-language function names are case-insensitive; the registry stores
//! them lowercased. Registries are plain values: build one per configuration
//! and pass it to whichever parser needs it.
//!
//! Registries can also be loaded from JSON:
//!
//! ```json
//! {
//!   "empty_allow_list": "deny_all",
//!   "functions": [
//!     { "name": "st_snaptogrid", "sql_name": "ST_SnapToGrid",
//!       "min_args": 2, "max_args": 6, "platforms": ["postgresql"] }
//!   ]
//! }
//! ```
//!
//! `max_args` absent or `null` means unbounded, `sql_name` defaults to
//! `name`, and `empty_allow_list` applies to every function in the document.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

use crate::arity::{ArgumentBounds, MaxArgs};
use crate::error::{GeoDqlError, Result};
use crate::function_catalog::{CatalogEntry, MYSQL_FUNCTIONS, POSTGRESQL_FUNCTIONS};
use crate::node::{FunctionCall, FunctionDefinition};
use crate::platform::{AllowList, EmptyAllowList};
use crate::token::{TokenConsumer, TokenKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionRegistry {
    functions: BTreeMap<String, FunctionDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryConfig {
    #[serde(default)]
    empty_allow_list: EmptyAllowList,
    #[serde(default)]
    functions: Vec<FunctionConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FunctionConfig {
    name: String,
    #[serde(default)]
    sql_name: Option<String>,
    min_args: usize,
    #[serde(default)]
    max_args: Option<usize>,
    #[serde(default)]
    platforms: Vec<String>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: &[CatalogEntry]) -> Result<Self> {
        let mut registry = Self::new();
        for entry in catalog {
            registry.register(entry.name, entry.to_definition()?)?;
        }
        tracing::debug!(functions = registry.len(), "built registry from catalog");
        Ok(registry)
    }

    /// Registry of the PostGIS catalog.
    pub fn postgresql() -> Result<Self> {
        Self::with_catalog(POSTGRESQL_FUNCTIONS)
    }

    /// Registry of the MySQL spatial catalog.
    pub fn mysql() -> Result<Self> {
        Self::with_catalog(MYSQL_FUNCTIONS)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let mut registry = Self::new();
        registry.load_json(json)?;
        Ok(registry)
    }

    pub fn from_json_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Add the functions of a JSON document to this registry.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let config: RegistryConfig = serde_json::from_str(json)?;
        self.apply(config)
    }

    /// Validate every function in `config` before registering any of them,
    /// so a failing document leaves the registry untouched.
    fn apply(&mut self, config: RegistryConfig) -> Result<()> {
        let mut staged: BTreeMap<String, FunctionDefinition> = BTreeMap::new();
        for function in config.functions {
            let sql_name = function.sql_name.as_deref().unwrap_or(&function.name);
            let definition = FunctionDefinition::new(
                sql_name,
                ArgumentBounds::new(function.min_args, MaxArgs::from(function.max_args))?,
                AllowList::new(function.platforms)
                    .with_empty_policy(config.empty_allow_list),
            )?;
            let key = function.name.to_ascii_lowercase();
            if self.functions.contains_key(&key) || staged.contains_key(&key) {
                return Err(GeoDqlError::DuplicateFunction(function.name));
            }
            staged.insert(key, definition);
        }

        let count = staged.len();
        self.functions.extend(staged);
        tracing::debug!(functions = count, "loaded registry configuration");
        Ok(())
    }

    /// Register `definition` under `name` (case-insensitive).
    pub fn register(&mut self, name: &str, definition: FunctionDefinition) -> Result<()> {
        let key = name.to_ascii_lowercase();
        match self.functions.entry(key) {
            Entry::Occupied(_) => Err(GeoDqlError::DuplicateFunction(name.to_string())),
            Entry::Vacant(slot) => {
                tracing::trace!(name, sql_name = definition.name(), "registered function");
                slot.insert(definition);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FunctionDefinition> {
        self.functions.get(&name.to_ascii_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered `(lowercase name, definition)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FunctionDefinition)> {
        self.functions
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
    }

    /// Look up the identifier at the head of `stream` and parse a call to it.
    ///
    /// # Example
    ///
    /// ```
    /// use geodql_core::{FunctionRegistry, OwnedToken, TokenConsumer, TokenCursor, TokenKind};
    ///
    /// let registry = FunctionRegistry::postgresql().unwrap();
    /// let mut stream = TokenCursor::new(vec![
    ///     OwnedToken::new(TokenKind::Identifier, "st_area", 0),
    ///     OwnedToken::new(TokenKind::OpenParenthesis, "(", 7),
    ///     OwnedToken::new(TokenKind::Identifier, "geom", 8),
    ///     OwnedToken::new(TokenKind::CloseParenthesis, ")", 12),
    /// ]);
    ///
    /// let call = registry
    ///     .parse_call(&mut stream, |s| {
    ///         let text = s.peek().unwrap().text.to_string();
    ///         s.advance();
    ///         Ok(text)
    ///     })
    ///     .unwrap();
    /// let sql = call.render("postgresql", |arg| Ok(arg.clone())).unwrap();
    /// assert_eq!(sql, "ST_Area(geom)");
    /// ```
    pub fn parse_call<'r, S, E, F>(
        &'r self,
        stream: &mut S,
        parse_expression: F,
    ) -> Result<FunctionCall<'r, E>>
    where
        S: TokenConsumer + ?Sized,
        F: FnMut(&mut S) -> Result<E>,
    {
        let definition = match stream.peek() {
            Some(token) if token.kind == TokenKind::Identifier => self
                .get(token.text)
                .ok_or_else(|| GeoDqlError::UnknownFunction(token.text.to_string()))?,
            Some(token) => {
                return Err(GeoDqlError::Syntax {
                    expected: TokenKind::Identifier,
                    found: format!("'{}'", token.text),
                    position: token.position,
                })
            }
            None => {
                return Err(GeoDqlError::Syntax {
                    expected: TokenKind::Identifier,
                    found: "end of input".to_string(),
                    position: stream.position(),
                })
            }
        };

        FunctionCall::parse(definition, stream, parse_expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MYSQL, POSTGRESQL};

    fn definition(name: &str) -> FunctionDefinition {
        FunctionDefinition::new(
            name,
            ArgumentBounds::exactly(1).unwrap(),
            AllowList::unrestricted(),
        )
        .unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = FunctionRegistry::postgresql().unwrap();
        let def = registry.get("ST_DISTANCE").unwrap();
        assert_eq!(def.name(), "ST_Distance");
        assert!(registry.contains("st_distance"));
        assert!(!registry.contains("GLength"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = FunctionRegistry::new();
        registry.register("st_x", definition("ST_X")).unwrap();
        let err = registry.register("ST_X", definition("ST_X")).unwrap_err();
        assert!(matches!(err, GeoDqlError::DuplicateFunction(name) if name == "ST_X"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn catalogs_populate_registries() {
        let pg = FunctionRegistry::postgresql().unwrap();
        let my = FunctionRegistry::mysql().unwrap();
        assert_eq!(pg.len(), POSTGRESQL_FUNCTIONS.len());
        assert_eq!(my.len(), MYSQL_FUNCTIONS.len());
        assert!(pg.get("st_contains").unwrap().platforms().permits(POSTGRESQL));
        assert!(!my.get("contains").unwrap().platforms().permits(POSTGRESQL));
    }

    #[test]
    fn iter_is_sorted_by_lowercase_name() {
        let mut registry = FunctionRegistry::new();
        registry.register("ST_Y", definition("ST_Y")).unwrap();
        registry.register("ST_X", definition("ST_X")).unwrap();
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["st_x", "st_y"]);
    }

    #[test]
    fn json_configuration_builds_definitions() {
        let registry = FunctionRegistry::from_json(
            r#"{
                "functions": [
                    { "name": "st_snaptogrid", "sql_name": "ST_SnapToGrid",
                      "min_args": 2, "max_args": 6, "platforms": ["postgresql"] },
                    { "name": "ST_Collect", "min_args": 1 }
                ]
            }"#,
        )
        .unwrap();

        let snap = registry.get("ST_SNAPTOGRID").unwrap();
        assert_eq!(snap.name(), "ST_SnapToGrid");
        assert_eq!(snap.bounds().max(), MaxArgs::Bounded(6));
        assert!(!snap.platforms().permits(MYSQL));

        let collect = registry.get("st_collect").unwrap();
        assert_eq!(collect.name(), "ST_Collect");
        assert_eq!(collect.bounds().max(), MaxArgs::Unbounded);
        assert!(collect.platforms().permits(MYSQL));
    }

    #[test]
    fn json_deny_all_policy_applies_to_every_function() {
        let registry = FunctionRegistry::from_json_reader(
            br#"{ "empty_allow_list": "deny_all",
                  "functions": [ { "name": "f", "min_args": 1 } ] }"#
                .as_slice(),
        )
        .unwrap();
        let f = registry.get("f").unwrap();
        assert_eq!(f.platforms().empty_policy(), EmptyAllowList::DenyAll);
        assert!(!f.platforms().permits(POSTGRESQL));
    }

    #[test]
    fn json_extends_catalog_registry() {
        let mut registry = FunctionRegistry::postgresql().unwrap();
        let before = registry.len();
        registry
            .load_json(r#"{ "functions": [ { "name": "ST_NPoints", "min_args": 1, "max_args": 1 } ] }"#)
            .unwrap();
        assert_eq!(registry.len(), before + 1);

        let err = registry
            .load_json(r#"{ "functions": [ { "name": "st_area", "min_args": 1 } ] }"#)
            .unwrap_err();
        assert!(matches!(err, GeoDqlError::DuplicateFunction(_)));
    }

    #[test]
    fn failed_document_leaves_registry_unchanged() {
        let mut registry = FunctionRegistry::postgresql().unwrap();
        let before = registry.len();
        let err = registry
            .load_json(
                r#"{ "functions": [
                    { "name": "ST_NPoints", "min_args": 1, "max_args": 1 },
                    { "name": "st_area", "min_args": 1 }
                ] }"#,
            )
            .unwrap_err();
        assert!(matches!(err, GeoDqlError::DuplicateFunction(_)));
        assert_eq!(registry.len(), before);
        assert!(!registry.contains("st_npoints"));

        let mut empty = FunctionRegistry::new();
        let err = empty
            .load_json(
                r#"{ "functions": [
                    { "name": "a", "min_args": 1 },
                    { "name": "b", "min_args": 3, "max_args": 1 }
                ] }"#,
            )
            .unwrap_err();
        assert!(matches!(err, GeoDqlError::InvalidDefinition(_)));
        assert!(empty.is_empty());
    }

    #[test]
    fn duplicates_within_one_document_are_rejected() {
        let mut registry = FunctionRegistry::new();
        let err = registry
            .load_json(
                r#"{ "functions": [
                    { "name": "ST_X", "min_args": 1, "max_args": 1 },
                    { "name": "st_x", "min_args": 1, "max_args": 1 }
                ] }"#,
            )
            .unwrap_err();
        assert!(matches!(err, GeoDqlError::DuplicateFunction(name) if name == "st_x"));
        assert!(registry.is_empty());
    }

    #[test]
    fn reader_failures_surface_as_io_errors() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }

        let err = FunctionRegistry::from_json_reader(Broken).unwrap_err();
        assert!(matches!(err, GeoDqlError::Io(_)));
        assert_eq!(err.to_string(), "io error: disk gone");
    }

    #[test]
    fn json_errors_are_reported() {
        assert!(matches!(
            FunctionRegistry::from_json("{ not json").unwrap_err(),
            GeoDqlError::Config(_)
        ));
        assert!(matches!(
            FunctionRegistry::from_json(r#"{ "functions": [ { "name": "f" } ] }"#).unwrap_err(),
            GeoDqlError::Config(_)
        ));
        assert!(matches!(
            FunctionRegistry::from_json(
                r#"{ "functions": [ { "name": "f", "min_args": 3, "max_args": 2 } ] }"#
            )
            .unwrap_err(),
            GeoDqlError::InvalidDefinition(_)
        ));
    }
}
