//! DuckDB SQL dialect (Strategy pattern).
//!
//! Provides DuckDB's native type table, its representative canonical types and
//! its identifier quoting rule.

use std::sync::OnceLock;

use tracing::debug;

use crate::core::identifier::quote_single_verbatim;
use crate::core::traits::SqlDialect;
use crate::dialect::{ColumnKind, ColumnType, ColumnTypeMap, CoreColumnTypes};

/// DuckDB dialect implementation.
///
/// A process-wide singleton: obtain it with [`DuckDbDialect::instance`].
#[derive(Debug)]
pub struct DuckDbDialect {
    core_column_types: CoreColumnTypes,
    column_types: ColumnTypeMap,
}

static INSTANCE: OnceLock<DuckDbDialect> = OnceLock::new();

impl DuckDbDialect {
    /// Dialect identifier.
    pub const NAME: &'static str = "duckdb";

    /// The shared DuckDB dialect, built on first access.
    ///
    /// Concurrent first calls construct exactly one instance; every caller
    /// receives the same reference.
    pub fn instance() -> &'static DuckDbDialect {
        INSTANCE.get_or_init(|| {
            debug!(dialect = Self::NAME, "Building dialect type tables");
            Self::build()
        })
    }

    fn build() -> Self {
        let int = ColumnType::new("INTEGER", ColumnKind::Integer);
        let real = ColumnType::new("DOUBLE", ColumnKind::Real);
        let text = ColumnType::new("VARCHAR", ColumnKind::String);
        let boolean = ColumnType::new("BOOL", ColumnKind::Boolean);
        let timestamp = ColumnType::new("TIMESTAMP", ColumnKind::Timestamp);
        let blob = ColumnType::new("BLOB", ColumnKind::Blob);

        // TIMESTAMP and BLOB are recognized in results but never synthesized,
        // so they have no representative entry.
        let core_column_types =
            CoreColumnTypes::from_types([int.clone(), real.clone(), text.clone(), boolean.clone()]);

        let column_types = ColumnTypeMap::from_entries([
            ("INTEGER", int.clone()),
            ("BIGINT", int.clone()),
            ("HUGEINT", int),
            ("DECIMAL", real.clone()),
            ("DOUBLE", real.clone()),
            ("REAL", real.clone()),
            ("FLOAT", real),
            ("TEXT", text.clone()),
            ("TIMESTAMP", timestamp),
            ("VARCHAR", text),
            ("BOOL", boolean.clone()),
            ("BOOLEAN", boolean),
            ("BLOB", blob),
        ]);

        Self {
            core_column_types,
            column_types,
        }
    }
}

impl SqlDialect for DuckDbDialect {
    fn dialect_name(&self) -> &str {
        Self::NAME
    }

    fn require_subquery_alias(&self) -> bool {
        true
    }

    fn core_column_types(&self) -> &CoreColumnTypes {
        &self.core_column_types
    }

    fn column_types(&self) -> &ColumnTypeMap {
        &self.column_types
    }

    fn quote_col(&self, ident: &str) -> String {
        // DuckDB accepts single or double quotes around columns, but it
        // generates names with unescaped double quotes inside them, e.g.
        // `CREATE TABLE t1 AS SELECT hour(timestamp) FROM t0` yields a column
        // named hour("timestamp").
        quote_single_verbatim(ident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::RawValue;

    fn dialect() -> &'static DuckDbDialect {
        DuckDbDialect::instance()
    }

    #[test]
    fn test_name_and_subquery_alias() {
        assert_eq!(dialect().dialect_name(), "duckdb");
        assert!(dialect().require_subquery_alias());
    }

    #[test]
    fn test_quote_col_single_quotes() {
        assert_eq!(dialect().quote_col("timestamp"), "'timestamp'");
        assert_eq!(
            dialect().quote_col("hour(\"timestamp\")"),
            "'hour(\"timestamp\")'"
        );
    }

    #[test]
    fn test_integer_aliases_share_instance() {
        let types = dialect().column_types();
        let int = types.get("INTEGER").unwrap();
        for alias in ["BIGINT", "HUGEINT"] {
            assert!(ColumnType::same(int, types.get(alias).unwrap()));
        }
        assert_eq!(int.kind(), ColumnKind::Integer);
    }

    #[test]
    fn test_native_table_kinds() {
        let expected = [
            ("INTEGER", ColumnKind::Integer),
            ("BIGINT", ColumnKind::Integer),
            ("HUGEINT", ColumnKind::Integer),
            ("DECIMAL", ColumnKind::Real),
            ("DOUBLE", ColumnKind::Real),
            ("REAL", ColumnKind::Real),
            ("FLOAT", ColumnKind::Real),
            ("TEXT", ColumnKind::String),
            ("VARCHAR", ColumnKind::String),
            ("TIMESTAMP", ColumnKind::Timestamp),
            ("BOOL", ColumnKind::Boolean),
            ("BOOLEAN", ColumnKind::Boolean),
            ("BLOB", ColumnKind::Blob),
        ];
        let types = dialect().column_types();
        assert_eq!(types.len(), expected.len());
        for (name, kind) in expected {
            assert_eq!(types.get(name).unwrap().kind(), kind, "{}", name);
        }
    }

    #[test]
    fn test_core_types_omit_timestamp_and_blob() {
        let core = dialect().core_column_types();
        assert_eq!(
            core.kinds(),
            vec![
                ColumnKind::Integer,
                ColumnKind::Real,
                ColumnKind::String,
                ColumnKind::Boolean
            ]
        );
        assert!(!core.contains(ColumnKind::Timestamp));
        assert!(!core.contains(ColumnKind::Blob));
    }

    #[test]
    fn test_representative_native_names() {
        let core = dialect().core_column_types();
        assert_eq!(core.get(ColumnKind::Integer).unwrap().native_type_name(), "INTEGER");
        assert_eq!(core.get(ColumnKind::Real).unwrap().native_type_name(), "DOUBLE");
        assert_eq!(core.get(ColumnKind::String).unwrap().native_type_name(), "VARCHAR");
        assert_eq!(core.get(ColumnKind::Boolean).unwrap().native_type_name(), "BOOL");
    }

    #[test]
    fn test_render_through_table() {
        let d = dialect();
        assert_eq!(
            d.render_value("TIMESTAMP", &RawValue::Int(0)).unwrap(),
            "1970-01-01T00:00:00.000Z"
        );
        assert_eq!(
            d.render_value("BLOB", &RawValue::from(b"hello".to_vec())).unwrap(),
            "hello"
        );
        assert!(d.render_value("INTERVAL", &RawValue::Null).is_err());
    }
}
