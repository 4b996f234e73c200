//! SQLite driver.
//!
//! - [`SqliteDialect`]: type tables and quoting rules for SQLite

mod dialect;

pub use dialect::SqliteDialect;
