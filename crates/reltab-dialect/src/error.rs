//! Error types for the dialect layer.
//!
//! Rendering never produces an error: [`ColumnType::render`](crate::ColumnType::render)
//! is total. These variants cover lookups, identifier validation and
//! configuration loading.

use thiserror::Error;

/// Main error type for dialect operations.
#[derive(Error, Debug)]
pub enum DialectError {
    /// No dialect registered under this name.
    #[error("Unknown SQL dialect: '{0}'")]
    UnknownDialect(String),

    /// The database reported a native type the dialect's type table has no entry for.
    #[error("Unmapped native type '{native_type}' for dialect {dialect}")]
    UnmappedType { dialect: String, native_type: String },

    /// Identifier rejected before quoting.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Configuration error (invalid YAML, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DialectError {
    /// Create an UnmappedType error.
    pub fn unmapped(dialect: impl Into<String>, native_type: impl Into<String>) -> Self {
        DialectError::UnmappedType {
            dialect: dialect.into(),
            native_type: native_type.into(),
        }
    }

    /// Process exit code for this error when surfaced by a binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            DialectError::Config(_) | DialectError::Yaml(_) | DialectError::Json(_) => 1,
            DialectError::UnknownDialect(_) => 2,
            DialectError::UnmappedType { .. } => 3,
            DialectError::InvalidIdentifier(_) => 4,
            DialectError::Io(_) => 7,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
