//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Dialect name or alias (default: duckdb).
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Runtime used to pick the blob decode path (default: auto).
    #[serde(default)]
    pub runtime: RuntimeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: default_dialect(),
            runtime: RuntimeMode::default(),
        }
    }
}

/// Which runtime the rendered values come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    /// Detect from the compilation target.
    #[default]
    Auto,
    /// Server-side runtime with native byte buffers.
    Server,
    /// Browser-like runtime.
    Browser,
}

fn default_dialect() -> String {
    "duckdb".to_string()
}
