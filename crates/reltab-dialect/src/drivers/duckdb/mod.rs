//! DuckDB driver.
//!
//! - [`DuckDbDialect`]: type tables and quoting rules for DuckDB

mod dialect;

pub use dialect::DuckDbDialect;
