//! Built-in dialect implementations.
//!
//! - [`duckdb`]: DuckDB
//! - [`sqlite`]: SQLite
//!
//! # Static dispatch
//!
//! [`DialectImpl`] wraps each built-in singleton in an enum variant that
//! implements [`SqlDialect`] by delegation, so callers get the capability set
//! without a vtable. The set of built-ins is fixed at compile time.
//!
//! # Adding New Databases
//!
//! 1. Create a new module under `drivers/` with a singleton `instance()`
//! 2. Implement [`SqlDialect`] for it
//! 3. Add an enum variant to `DialectImpl` and its aliases to
//!    [`normalize_dialect_name`](crate::core::normalize_dialect_name)
//! 4. Register it in [`DialectCatalog::with_builtins`](crate::core::DialectCatalog::with_builtins)

pub mod duckdb;
pub mod sqlite;

pub use duckdb::DuckDbDialect;
pub use sqlite::SqliteDialect;

use crate::core::catalog::normalize_dialect_name;
use crate::core::traits::SqlDialect;
use crate::dialect::{ColumnTypeMap, CoreColumnTypes};
use crate::error::{DialectError, Result};

/// Enum-based static dispatch over the built-in dialects.
#[derive(Debug, Clone, Copy)]
pub enum DialectImpl {
    DuckDb(&'static DuckDbDialect),
    Sqlite(&'static SqliteDialect),
}

impl DialectImpl {
    /// Resolve a dialect by name or alias (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownDialect`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self> {
        match normalize_dialect_name(name)? {
            DuckDbDialect::NAME => Ok(DialectImpl::DuckDb(DuckDbDialect::instance())),
            SqliteDialect::NAME => Ok(DialectImpl::Sqlite(SqliteDialect::instance())),
            _ => Err(DialectError::UnknownDialect(name.to_string())),
        }
    }

    /// The underlying singleton as a trait object.
    pub fn as_dyn(&self) -> &'static dyn SqlDialect {
        match *self {
            DialectImpl::DuckDb(d) => d,
            DialectImpl::Sqlite(d) => d,
        }
    }
}

impl SqlDialect for DialectImpl {
    fn dialect_name(&self) -> &str {
        match self {
            DialectImpl::DuckDb(d) => d.dialect_name(),
            DialectImpl::Sqlite(d) => d.dialect_name(),
        }
    }

    fn require_subquery_alias(&self) -> bool {
        match self {
            DialectImpl::DuckDb(d) => d.require_subquery_alias(),
            DialectImpl::Sqlite(d) => d.require_subquery_alias(),
        }
    }

    fn core_column_types(&self) -> &CoreColumnTypes {
        match self {
            DialectImpl::DuckDb(d) => d.core_column_types(),
            DialectImpl::Sqlite(d) => d.core_column_types(),
        }
    }

    fn column_types(&self) -> &ColumnTypeMap {
        match self {
            DialectImpl::DuckDb(d) => d.column_types(),
            DialectImpl::Sqlite(d) => d.column_types(),
        }
    }

    fn quote_col(&self, ident: &str) -> String {
        match self {
            DialectImpl::DuckDb(d) => d.quote_col(ident),
            DialectImpl::Sqlite(d) => d.quote_col(ident),
        }
    }
}
