//! Input validation for catalog records.
//!
//! The GraphQL layer rejects bad mutation arguments through schema-level
//! validators; these checks cover the other ingestion boundary, seed files.

use crate::error::{BookshelfError, Result};

/// Maximum allowed length for an author or book name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Validates a record name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(BookshelfError::Validation(
            "Name cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(BookshelfError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// Validates a record id. Ids are positive integers.
pub fn validate_id(id: i32) -> Result<()> {
    if id < 1 {
        return Err(BookshelfError::Validation(format!(
            "Id must be a positive integer, got {}",
            id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_empty() {
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("A Wizard of Earthsea").is_ok());
    }

    #[test]
    fn test_validate_name_too_long() {
        let long_name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_name(&long_name).is_err());
    }

    #[test]
    fn test_validate_name_at_limit() {
        let name = "a".repeat(MAX_NAME_LENGTH);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn test_validate_id_positive() {
        assert!(validate_id(1).is_ok());
        assert!(validate_id(42).is_ok());
    }

    #[test]
    fn test_validate_id_zero() {
        assert!(validate_id(0).is_err());
    }

    #[test]
    fn test_validate_id_negative() {
        assert!(validate_id(-3).is_err());
    }
}
