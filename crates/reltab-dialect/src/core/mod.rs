//! Core abstractions shared by every dialect.
//!
//! - [`traits`]: the [`SqlDialect`] capability set
//! - [`value`]: raw column values from the execution layer
//! - [`identifier`]: identifier validation and quoting forms
//! - [`catalog`]: name → dialect registry
//!
//! # Architecture
//!
//! The core module defines the engine-independent contract; the `drivers`
//! module supplies one implementation per database engine. The query engine
//! works through [`SqlDialect`] only.

pub mod catalog;
pub mod identifier;
pub mod traits;
pub mod value;

pub use catalog::{normalize_dialect_name, DialectCatalog};
pub use traits::SqlDialect;
pub use value::RawValue;
