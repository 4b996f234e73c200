//! SQLite SQL dialect (Strategy pattern).
//!
//! SQLite keeps the standard double-quote identifier quoting and does not
//! require subquery aliases.

use std::sync::OnceLock;

use tracing::debug;

use crate::core::traits::SqlDialect;
use crate::dialect::{ColumnKind, ColumnType, ColumnTypeMap, CoreColumnTypes};

/// SQLite dialect implementation.
#[derive(Debug)]
pub struct SqliteDialect {
    core_column_types: CoreColumnTypes,
    column_types: ColumnTypeMap,
}

static INSTANCE: OnceLock<SqliteDialect> = OnceLock::new();

impl SqliteDialect {
    /// Dialect identifier.
    pub const NAME: &'static str = "sqlite";

    /// The shared SQLite dialect, built on first access.
    pub fn instance() -> &'static SqliteDialect {
        INSTANCE.get_or_init(|| {
            debug!(dialect = Self::NAME, "Building dialect type tables");
            Self::build()
        })
    }

    fn build() -> Self {
        let int = ColumnType::new("INTEGER", ColumnKind::Integer);
        let real = ColumnType::new("REAL", ColumnKind::Real);
        let text = ColumnType::new("TEXT", ColumnKind::String);
        let boolean = ColumnType::new("BOOLEAN", ColumnKind::Boolean);
        let timestamp = ColumnType::new("TIMESTAMP", ColumnKind::Timestamp);
        let blob = ColumnType::new("BLOB", ColumnKind::Blob);

        let core_column_types =
            CoreColumnTypes::from_types([int.clone(), real.clone(), text.clone(), boolean.clone()]);

        // Declared column types as SQLite reports them from PRAGMA table_info
        let column_types = ColumnTypeMap::from_entries([
            ("INTEGER", int.clone()),
            ("INT", int.clone()),
            ("BIGINT", int),
            ("REAL", real.clone()),
            ("DOUBLE", real.clone()),
            ("FLOAT", real.clone()),
            ("NUMERIC", real),
            ("TEXT", text.clone()),
            ("VARCHAR", text),
            ("BOOLEAN", boolean),
            ("TIMESTAMP", timestamp.clone()),
            ("DATETIME", timestamp),
            ("BLOB", blob),
        ]);

        Self {
            core_column_types,
            column_types,
        }
    }
}

impl SqlDialect for SqliteDialect {
    fn dialect_name(&self) -> &str {
        Self::NAME
    }

    fn require_subquery_alias(&self) -> bool {
        false
    }

    fn core_column_types(&self) -> &CoreColumnTypes {
        &self.core_column_types
    }

    fn column_types(&self) -> &ColumnTypeMap {
        &self.column_types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_standard_quoting() {
        let d = SqliteDialect::instance();
        assert_eq!(d.quote_col("timestamp"), "\"timestamp\"");
        assert_eq!(d.quote_col("hour(\"ts\")"), "\"hour(\"\"ts\"\")\"");
    }

    #[test]
    fn test_flags() {
        let d = SqliteDialect::instance();
        assert_eq!(d.dialect_name(), "sqlite");
        assert!(!d.require_subquery_alias());
    }

    #[test]
    fn test_timestamp_aliases() {
        let types = SqliteDialect::instance().column_types();
        let ts = types.get("TIMESTAMP").unwrap();
        assert!(ColumnType::same(ts, types.get("DATETIME").unwrap()));
        assert_eq!(ts.kind(), ColumnKind::Timestamp);
    }

    #[test]
    fn test_singleton() {
        assert!(std::ptr::eq(SqliteDialect::instance(), SqliteDialect::instance()));
    }
}
