//! Identifier validation and quoting helpers.
//!
//! Identifiers (table and column names) cannot be bound as statement
//! parameters, so generated SQL embeds them as quoted text. Dialects pick one
//! of the quoting forms below; [`validate_identifier`] screens names before
//! they are embedded.

use crate::error::{DialectError, Result};

/// Maximum identifier length in bytes.
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Validate an identifier before quoting.
///
/// Rejects:
/// - Empty identifiers
/// - Identifiers containing null bytes
/// - Identifiers exceeding maximum length
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(DialectError::InvalidIdentifier(
            "Identifier cannot be empty".to_string(),
        ));
    }

    if name.contains('\0') {
        return Err(DialectError::InvalidIdentifier(format!(
            "Identifier contains null byte: {:?}",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(DialectError::InvalidIdentifier(format!(
            "Identifier exceeds maximum length of {} bytes (got {} bytes): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    Ok(())
}

/// SQL-standard quoting: wrap in double quotes, doubling embedded ones.
///
/// ```ignore
/// assert_eq!(quote_double("users"), "\"users\"");
/// assert_eq!(quote_double("table\"name"), "\"table\"\"name\"");
/// ```
pub fn quote_double(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Wrap in single quotes with no escaping.
///
/// For engines that generate column names containing bare double quotes,
/// e.g. `hour("timestamp")`; the name is passed through verbatim.
pub fn quote_single_verbatim(name: &str) -> String {
    format!("'{}'", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("users").is_ok());
        assert!(validate_identifier("hour(\"timestamp\")").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("bad\0name").is_err());
        assert!(validate_identifier(&"x".repeat(MAX_IDENTIFIER_LENGTH)).is_ok());
        assert!(validate_identifier(&"x".repeat(MAX_IDENTIFIER_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_identifier_error_variant() {
        match validate_identifier("") {
            Err(DialectError::InvalidIdentifier(msg)) => assert!(msg.contains("empty")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_quote_double() {
        assert_eq!(quote_double("users"), "\"users\"");
        assert_eq!(quote_double("table\"name"), "\"table\"\"name\"");
    }

    #[test]
    fn test_quote_single_verbatim() {
        assert_eq!(quote_single_verbatim("timestamp"), "'timestamp'");
        assert_eq!(
            quote_single_verbatim("hour(\"timestamp\")"),
            "'hour(\"timestamp\")'"
        );
    }
}
