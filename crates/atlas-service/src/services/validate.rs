//! Input validation helpers shared by the services
//!
//! Length limits mirror the column widths in the schema, so oversized input
//! is rejected with a clear message instead of surfacing as a database error.

use super::error::{ServiceError, ServiceResult};

/// Reject an empty or whitespace-only required string
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Reject a string longer than `max` characters
pub(crate) fn require_max_chars(
    field: &'static str,
    value: &str,
    max: usize,
) -> ServiceResult<()> {
    if value.chars().count() > max {
        return Err(ServiceError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Apply the length check to an optional field
pub(crate) fn require_optional_max_chars(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> ServiceResult<()> {
    match value {
        Some(v) => require_max_chars(field, v, max),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("name", "Cafe A").is_ok());
        assert!(require_non_empty("name", "").is_err());
        assert!(require_non_empty("name", "   ").is_err());
    }

    #[test]
    fn test_require_max_chars_counts_characters_not_bytes() {
        assert!(require_max_chars("name", "abc", 3).is_ok());
        assert!(require_max_chars("name", "abcd", 3).is_err());
        // Four characters even though more bytes
        assert!(require_max_chars("name", "日本語だ", 4).is_ok());
    }

    #[test]
    fn test_optional_is_skipped_when_absent() {
        assert!(require_optional_max_chars("city", None, 1).is_ok());
        assert!(require_optional_max_chars("city", Some("Helsinki"), 64).is_ok());
        assert!(require_optional_max_chars("city", Some("Helsinki"), 4).is_err());
    }
}
