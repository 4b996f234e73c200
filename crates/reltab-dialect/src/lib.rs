//! # reltab-dialect
//!
//! SQL dialect abstraction layer for the reltab query builder.
//!
//! Each supported database engine is described by a dialect that provides:
//!
//! - **Native type table**: engine-reported type names → canonical column types
//! - **Representative types**: the type to declare for a synthesized column of a kind
//! - **Identifier quoting**: how column names are embedded in generated SQL
//! - **Grammar flags**: e.g. whether derived subqueries need an alias
//!
//! Canonical column types also render raw result values as display text,
//! with graceful fallbacks for malformed timestamps and binary data.
//!
//! ## Example
//!
//! ```rust
//! use reltab_dialect::{ColumnKind, DuckDbDialect, RawValue, SqlDialect};
//!
//! let duckdb = DuckDbDialect::instance();
//! assert_eq!(duckdb.quote_col("timestamp"), "'timestamp'");
//!
//! let ts = duckdb.require_column_type("TIMESTAMP").unwrap();
//! assert_eq!(ts.kind(), ColumnKind::Timestamp);
//! assert_eq!(ts.render(&RawValue::Int(0)), "1970-01-01T00:00:00.000Z");
//! ```

pub mod config;
pub mod core;
pub mod dialect;
pub mod drivers;
pub mod error;
pub mod render;

// Re-exports for convenient access
pub use crate::core::{DialectCatalog, RawValue, SqlDialect};
pub use config::{Config, RuntimeMode};
pub use dialect::{ColumnKind, ColumnType, ColumnTypeMap, ColumnTypeOptions, CoreColumnTypes};
pub use drivers::{DialectImpl, DuckDbDialect, SqliteDialect};
pub use error::{DialectError, Result};
pub use render::RenderEnv;
