//! The dialect capability set.
//!
//! Every SQL dialect implements [`SqlDialect`]. The query engine only ever
//! holds a `&dyn SqlDialect` (or [`DialectImpl`](crate::drivers::DialectImpl))
//! and never branches on which concrete dialect it has.
//!
//! # Design Patterns
//!
//! - **Strategy**: dialects provide interchangeable type tables and quoting rules
//! - **Template Method**: provided methods build lookups and validation on top
//!   of the required accessors

use std::fmt::Debug;
use std::sync::Arc;

use crate::core::identifier::{quote_double, validate_identifier};
use crate::core::value::RawValue;
use crate::dialect::{ColumnKind, ColumnType, ColumnTypeMap, CoreColumnTypes};
use crate::error::{DialectError, Result};

/// Engine-specific type tables, quoting and grammar requirements.
pub trait SqlDialect: Send + Sync + Debug {
    /// Unique dialect identifier used for registry lookup (e.g., "duckdb").
    fn dialect_name(&self) -> &str;

    /// Whether the engine's grammar requires an alias on every derived subquery.
    fn require_subquery_alias(&self) -> bool;

    /// Canonical kind → representative type.
    fn core_column_types(&self) -> &CoreColumnTypes;

    /// Native type name → canonical type.
    fn column_types(&self) -> &ColumnTypeMap;

    /// Quote an identifier for embedding in generated SQL.
    ///
    /// Defaults to SQL-standard double quotes.
    fn quote_col(&self, ident: &str) -> String {
        quote_double(ident)
    }

    /// Look up the canonical type for a native type name.
    fn column_type(&self, native_type: &str) -> Option<&Arc<ColumnType>> {
        self.column_types().get(native_type)
    }

    /// Look up a native type name, returning an error if it is unmapped.
    fn require_column_type(&self, native_type: &str) -> Result<&Arc<ColumnType>> {
        self.column_type(native_type)
            .ok_or_else(|| DialectError::unmapped(self.dialect_name(), native_type))
    }

    /// Representative type for a canonical kind, if declared.
    fn core_column_type(&self, kind: ColumnKind) -> Option<&Arc<ColumnType>> {
        self.core_column_types().get(kind)
    }

    /// Validate an identifier, then quote it.
    fn try_quote_col(&self, ident: &str) -> Result<String> {
        validate_identifier(ident)?;
        Ok(self.quote_col(ident))
    }

    /// Render a raw value reported under a native type name.
    fn render_value(&self, native_type: &str, value: &RawValue<'_>) -> Result<String> {
        Ok(self.require_column_type(native_type)?.render(value))
    }
}
