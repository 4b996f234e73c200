//! Dialect catalog: name → dialect lookup for SQL generation.
//!
//! The [`DialectCatalog`] holds the fixed set of built-in dialects, keyed by
//! their canonical name. It can be constructed explicitly and injected, or
//! shared process-wide through [`DialectCatalog::global`].

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::drivers::{DuckDbDialect, SqliteDialect};
use crate::error::{DialectError, Result};

use super::traits::SqlDialect;

/// Registry of SQL dialects.
///
/// # Example
///
/// ```rust
/// use reltab_dialect::core::{DialectCatalog, SqlDialect};
///
/// let catalog = DialectCatalog::with_builtins();
/// let duckdb = catalog.require_dialect("duckdb").unwrap();
/// assert_eq!(duckdb.quote_col("ts"), "'ts'");
/// ```
#[derive(Default)]
pub struct DialectCatalog {
    dialects: HashMap<String, &'static dyn SqlDialect>,
}

impl DialectCatalog {
    fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with every built-in dialect registered.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        catalog.register_dialect(DuckDbDialect::instance());
        catalog.register_dialect(SqliteDialect::instance());
        catalog
    }

    /// Process-wide catalog of built-in dialects.
    pub fn global() -> &'static DialectCatalog {
        static GLOBAL: OnceLock<DialectCatalog> = OnceLock::new();
        GLOBAL.get_or_init(DialectCatalog::with_builtins)
    }

    /// Register a dialect under its own name.
    pub(crate) fn register_dialect(&mut self, dialect: &'static dyn SqlDialect) {
        self.dialects
            .insert(dialect.dialect_name().to_string(), dialect);
    }

    /// Get a dialect by name or alias.
    pub fn get_dialect(&self, name: &str) -> Option<&'static dyn SqlDialect> {
        let canonical = normalize_dialect_name(name).ok()?;
        let dialect = self.dialects.get(canonical).copied();
        debug!(name, found = dialect.is_some(), "Dialect lookup");
        dialect
    }

    /// Get a dialect by name, returning an error if not found.
    pub fn require_dialect(&self, name: &str) -> Result<&'static dyn SqlDialect> {
        self.get_dialect(name)
            .ok_or_else(|| DialectError::UnknownDialect(name.to_string()))
    }

    /// Check if a dialect is registered.
    pub fn has_dialect(&self, name: &str) -> bool {
        self.get_dialect(name).is_some()
    }

    /// Registered dialect names, sorted.
    pub fn dialect_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for DialectCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectCatalog")
            .field("dialects", &self.dialect_names())
            .finish()
    }
}

/// Get the canonical dialect name.
///
/// Normalizes aliases:
/// - "duckdb", "duck" → "duckdb"
/// - "sqlite", "sqlite3" → "sqlite"
pub fn normalize_dialect_name(name: &str) -> Result<&'static str> {
    match name.to_lowercase().as_str() {
        "duckdb" | "duck" => Ok(DuckDbDialect::NAME),
        "sqlite" | "sqlite3" => Ok(SqliteDialect::NAME),
        _ => Err(DialectError::UnknownDialect(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{ColumnTypeMap, CoreColumnTypes};

    #[derive(Debug)]
    struct MockDialect {
        core: CoreColumnTypes,
        types: ColumnTypeMap,
    }

    impl SqlDialect for MockDialect {
        fn dialect_name(&self) -> &str {
            "sqlite"
        }

        fn require_subquery_alias(&self) -> bool {
            true
        }

        fn core_column_types(&self) -> &CoreColumnTypes {
            &self.core
        }

        fn column_types(&self) -> &ColumnTypeMap {
            &self.types
        }
    }

    #[test]
    fn test_builtins_registered() {
        let catalog = DialectCatalog::with_builtins();
        assert_eq!(catalog.dialect_names(), vec!["duckdb", "sqlite"]);
        assert!(catalog.has_dialect("duckdb"));
        assert!(catalog.has_dialect("DUCK"));
        assert!(!catalog.has_dialect("postgres"));
    }

    #[test]
    fn test_require_dialect() {
        let catalog = DialectCatalog::with_builtins();
        assert_eq!(catalog.require_dialect("sqlite3").unwrap().dialect_name(), "sqlite");
        assert!(matches!(
            catalog.require_dialect("oracle"),
            Err(DialectError::UnknownDialect(name)) if name == "oracle"
        ));
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(DialectCatalog::global(), DialectCatalog::global()));
        let a = DialectCatalog::global().require_dialect("duckdb").unwrap();
        let b = DialectCatalog::with_builtins().require_dialect("duckdb").unwrap();
        assert_eq!(a.quote_col("x"), b.quote_col("x"));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut catalog = DialectCatalog::new();
        let mock: &'static MockDialect = Box::leak(Box::new(MockDialect {
            core: CoreColumnTypes::default(),
            types: ColumnTypeMap::default(),
        }));
        catalog.register_dialect(mock);
        assert!(catalog.require_dialect("sqlite").unwrap().require_subquery_alias());

        catalog.register_dialect(crate::drivers::SqliteDialect::instance());
        assert!(!catalog.require_dialect("sqlite").unwrap().require_subquery_alias());
        assert_eq!(catalog.dialect_names().len(), 1);
    }

    #[test]
    fn test_normalize_dialect_name() {
        assert_eq!(normalize_dialect_name("DuckDB").unwrap(), "duckdb");
        assert_eq!(normalize_dialect_name("sqlite3").unwrap(), "sqlite");
        assert!(normalize_dialect_name("mysql").is_err());
    }

    #[test]
    fn test_debug_lists_names() {
        let dbg = format!("{:?}", DialectCatalog::with_builtins());
        assert!(dbg.contains("duckdb"));
        assert!(dbg.contains("sqlite"));
    }
}
