//! Canonical column types shared by every dialect.
//!
//! Each dialect resolves the type names its engine reports to a small,
//! engine-independent set of kinds:
//!
//! ```text
//!   Native name   →   ColumnType    →   ColumnKind
//!   HUGEINT       →   INTEGER       →   integer
//!   VARCHAR       →   VARCHAR       →   string
//! ```
//!
//! The query engine reasons about [`ColumnKind`] only. [`ColumnType`] keeps the
//! representative native name and knows how to turn a raw value into display
//! text.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::value::RawValue;
use crate::error::{DialectError, Result};
use crate::render::{self, RenderEnv, RenderFn};

/// Canonical column kind.
///
/// This is a closed set; every native type of every dialect resolves to one
/// of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Integer,
    Real,
    String,
    Boolean,
    Timestamp,
    Blob,
}

impl ColumnKind {
    /// All kinds, in declaration order.
    pub const ALL: [ColumnKind; 6] = [
        ColumnKind::Integer,
        ColumnKind::Real,
        ColumnKind::String,
        ColumnKind::Boolean,
        ColumnKind::Timestamp,
        ColumnKind::Blob,
    ];

    /// Lower-case tag, e.g. `"integer"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Real => "real",
            ColumnKind::String => "string",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Timestamp => "timestamp",
            ColumnKind::Blob => "blob",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKind {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        ColumnKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DialectError::Config(format!("Unknown column kind: '{}'", s)))
    }
}

/// Construction options for [`ColumnType`].
#[derive(Default, Clone, Copy)]
pub struct ColumnTypeOptions {
    /// Replaces the kind's render function.
    pub string_render: Option<RenderFn>,
}

/// One canonical column type: a native type name, its kind and its renderer.
///
/// Instances are shared as `Arc<ColumnType>` and compared by identity, never
/// structurally: two types with the same name and kind are distinct unless
/// they are the same allocation. Use [`ColumnType::same`].
pub struct ColumnType {
    native_type_name: String,
    kind: ColumnKind,
    render_fn: RenderFn,
}

impl ColumnType {
    /// Create a column type using the kind's standard renderer.
    pub fn new(native_type_name: impl Into<String>, kind: ColumnKind) -> Arc<Self> {
        Self::with_options(native_type_name, kind, ColumnTypeOptions::default())
    }

    /// Create a column type, optionally overriding the renderer.
    pub fn with_options(
        native_type_name: impl Into<String>,
        kind: ColumnKind,
        options: ColumnTypeOptions,
    ) -> Arc<Self> {
        Arc::new(Self {
            native_type_name: native_type_name.into(),
            kind,
            render_fn: options
                .string_render
                .unwrap_or_else(|| render::renderer_for(kind)),
        })
    }

    /// The database-reported type name, e.g. `"TIMESTAMP"`.
    pub fn native_type_name(&self) -> &str {
        &self.native_type_name
    }

    /// The canonical kind.
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Identity comparison.
    pub fn same(a: &Arc<ColumnType>, b: &Arc<ColumnType>) -> bool {
        Arc::ptr_eq(a, b)
    }

    /// Render a raw value as display text for the current runtime.
    ///
    /// Never fails: conversion problems are logged and the value's generic
    /// text is returned instead.
    pub fn render(&self, value: &RawValue<'_>) -> String {
        self.render_with(value, RenderEnv::current())
    }

    /// Render a raw value for an explicit runtime environment.
    pub fn render_with(&self, value: &RawValue<'_>, env: &RenderEnv) -> String {
        let render_fn = self.render_fn;
        match panic::catch_unwind(AssertUnwindSafe(|| render_fn(value, env))) {
            Ok(text) => text,
            Err(_) => {
                warn!(
                    native_type = %self.native_type_name,
                    kind = %self.kind,
                    value = %value,
                    "Renderer panicked; falling back to raw value"
                );
                value.to_string()
            }
        }
    }
}

impl fmt::Debug for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnType")
            .field("native_type_name", &self.native_type_name)
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip_tags() {
        for kind in ColumnKind::ALL {
            assert_eq!(kind.as_str().parse::<ColumnKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
        assert!("INTEGER".parse::<ColumnKind>().is_err());
    }

    #[test]
    fn test_kind_serde_tag() {
        let json = serde_json::to_string(&ColumnKind::Timestamp).unwrap();
        assert_eq!(json, "\"timestamp\"");
        let kind: ColumnKind = serde_json::from_str("\"blob\"").unwrap();
        assert_eq!(kind, ColumnKind::Blob);
    }

    #[test]
    fn test_identity_not_structure() {
        let a = ColumnType::new("INTEGER", ColumnKind::Integer);
        let b = ColumnType::new("INTEGER", ColumnKind::Integer);
        let a2 = Arc::clone(&a);
        assert!(ColumnType::same(&a, &a2));
        assert!(!ColumnType::same(&a, &b));
    }

    #[test]
    fn test_default_render() {
        let int = ColumnType::new("INTEGER", ColumnKind::Integer);
        assert_eq!(int.render(&RawValue::Int(7)), "7");
        let text = ColumnType::new("VARCHAR", ColumnKind::String);
        assert_eq!(text.render(&RawValue::from("abc")), "abc");
        assert_eq!(text.render(&RawValue::Null), "");
    }

    #[test]
    fn test_custom_renderer_overrides_kind() {
        fn shout(value: &RawValue<'_>, _env: &RenderEnv) -> String {
            value.to_string().to_uppercase()
        }
        let ct = ColumnType::with_options(
            "VARCHAR",
            ColumnKind::String,
            ColumnTypeOptions {
                string_render: Some(shout),
            },
        );
        assert_eq!(ct.render(&RawValue::from("quiet")), "QUIET");
    }

    #[test]
    fn test_panicking_renderer_is_contained() {
        fn explode(_value: &RawValue<'_>, _env: &RenderEnv) -> String {
            panic!("renderer bug");
        }
        let ct = ColumnType::with_options(
            "DOUBLE",
            ColumnKind::Real,
            ColumnTypeOptions {
                string_render: Some(explode),
            },
        );
        assert_eq!(ct.render(&RawValue::Float(2.5)), "2.5");
    }
}
