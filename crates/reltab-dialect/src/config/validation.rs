//! Configuration validation.

use super::Config;
use crate::core::normalize_dialect_name;
use crate::error::{DialectError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    if config.dialect.trim().is_empty() {
        return Err(DialectError::Config("dialect is required".into()));
    }

    normalize_dialect_name(&config.dialect).map_err(|_| {
        DialectError::Config(format!(
            "dialect must be one of duckdb, sqlite; got '{}'",
            config.dialect
        ))
    })?;

    Ok(())
}
