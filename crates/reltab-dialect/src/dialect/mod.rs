//! Canonical column types and per-dialect type tables.
//!
//! # Usage
//!
//! Dialects build their tables once from shared [`ColumnType`] instances:
//!
//! ```rust
//! use reltab_dialect::dialect::{ColumnKind, ColumnType, ColumnTypeMap, CoreColumnTypes};
//!
//! let int = ColumnType::new("INTEGER", ColumnKind::Integer);
//! let types = ColumnTypeMap::from_entries([("INTEGER", int.clone()), ("BIGINT", int.clone())]);
//! let core = CoreColumnTypes::from_types([int.clone()]);
//!
//! assert!(ColumnType::same(types.get("BIGINT").unwrap(), core.get(ColumnKind::Integer).unwrap()));
//! ```

mod canonical;
mod typemap;

pub use canonical::{ColumnKind, ColumnType, ColumnTypeOptions};
pub use typemap::{ColumnTypeMap, CoreColumnTypes};
