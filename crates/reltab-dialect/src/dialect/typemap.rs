//! Per-dialect type tables.
//!
//! - [`ColumnTypeMap`]: native type name → [`ColumnType`]. Several aliases may
//!   share one instance (`INTEGER`, `BIGINT` and `HUGEINT` all resolve to the
//!   same `Arc`).
//! - [`CoreColumnTypes`]: canonical kind → representative [`ColumnType`], the
//!   type the query engine declares when it synthesizes a column of that kind.
//!
//! Both tables are built once and never mutated afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use super::canonical::{ColumnKind, ColumnType};

/// Native type name → canonical column type.
///
/// Keys are case-sensitive, exactly as the engine reports them. A miss is a
/// table defect; no fallback type is ever substituted.
#[derive(Debug, Clone, Default)]
pub struct ColumnTypeMap {
    types: HashMap<String, Arc<ColumnType>>,
}

impl ColumnTypeMap {
    /// Build from `(native name, type)` pairs. A repeated name keeps the last entry.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Arc<ColumnType>)>,
        K: Into<String>,
    {
        Self {
            types: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Look up a native type name.
    pub fn get(&self, native_type: &str) -> Option<&Arc<ColumnType>> {
        self.types.get(native_type)
    }

    /// Check if a native type name is mapped.
    pub fn contains(&self, native_type: &str) -> bool {
        self.types.contains_key(native_type)
    }

    /// Number of native names in the table.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over `(native name, type)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<ColumnType>)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Native names sorted alphabetically.
    pub fn native_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All native names that resolve to this exact instance.
    pub fn aliases_of(&self, column_type: &Arc<ColumnType>) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .iter()
            .filter(|(_, ct)| ColumnType::same(ct, column_type))
            .map(|(name, _)| name)
            .collect();
        names.sort_unstable();
        names
    }
}

/// Canonical kind → representative column type.
///
/// Holds at most one entry per kind. A dialect need not declare every kind.
#[derive(Debug, Clone, Default)]
pub struct CoreColumnTypes {
    types: HashMap<ColumnKind, Arc<ColumnType>>,
}

impl CoreColumnTypes {
    /// Build from representative types, each keyed by its own kind.
    /// A later type of the same kind replaces an earlier one.
    pub fn from_types<I>(types: I) -> Self
    where
        I: IntoIterator<Item = Arc<ColumnType>>,
    {
        Self {
            types: types.into_iter().map(|ct| (ct.kind(), ct)).collect(),
        }
    }

    /// Representative type for a kind, if this dialect declares one.
    pub fn get(&self, kind: ColumnKind) -> Option<&Arc<ColumnType>> {
        self.types.get(&kind)
    }

    pub fn contains(&self, kind: ColumnKind) -> bool {
        self.types.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Declared kinds in canonical order.
    pub fn kinds(&self) -> Vec<ColumnKind> {
        ColumnKind::ALL
            .into_iter()
            .filter(|k| self.types.contains_key(k))
            .collect()
    }

    /// Iterate over `(kind, type)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnKind, &Arc<ColumnType>)> {
        ColumnKind::ALL
            .into_iter()
            .filter_map(move |k| self.types.get(&k).map(|ct| (k, ct)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_instance() {
        let int = ColumnType::new("INTEGER", ColumnKind::Integer);
        let text = ColumnType::new("VARCHAR", ColumnKind::String);
        let map = ColumnTypeMap::from_entries([
            ("INTEGER", int.clone()),
            ("BIGINT", int.clone()),
            ("VARCHAR", text.clone()),
        ]);

        assert_eq!(map.len(), 3);
        assert!(ColumnType::same(map.get("BIGINT").unwrap(), &int));
        assert_eq!(map.aliases_of(&int), vec!["BIGINT", "INTEGER"]);
        assert_eq!(map.native_names(), vec!["BIGINT", "INTEGER", "VARCHAR"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let map = ColumnTypeMap::from_entries([(
            "INTEGER",
            ColumnType::new("INTEGER", ColumnKind::Integer),
        )]);
        assert!(map.contains("INTEGER"));
        assert!(map.get("integer").is_none());
    }

    #[test]
    fn test_core_types_keyed_by_kind() {
        let int = ColumnType::new("INTEGER", ColumnKind::Integer);
        let real = ColumnType::new("DOUBLE", ColumnKind::Real);
        let core = CoreColumnTypes::from_types([real.clone(), int.clone()]);

        assert_eq!(core.len(), 2);
        assert_eq!(core.kinds(), vec![ColumnKind::Integer, ColumnKind::Real]);
        assert!(ColumnType::same(core.get(ColumnKind::Real).unwrap(), &real));
        assert!(core.get(ColumnKind::Blob).is_none());
    }

    #[test]
    fn test_core_types_one_entry_per_kind() {
        let first = ColumnType::new("INT", ColumnKind::Integer);
        let second = ColumnType::new("BIGINT", ColumnKind::Integer);
        let core = CoreColumnTypes::from_types([first, second.clone()]);
        assert_eq!(core.len(), 1);
        assert!(ColumnType::same(core.get(ColumnKind::Integer).unwrap(), &second));
    }
}
