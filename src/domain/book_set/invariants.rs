use super::entity::BookSet;
use crate::domain::{DomainError, DomainResult};

/// Validates all BookSet invariants
/// Uniqueness of name and code across the store is checked at the service
/// layer; only single-entity rules live here.
pub fn validate_book_set(set: &BookSet) -> DomainResult<()> {
    validate_name(&set.name)?;
    validate_code(&set.code)?;
    Ok(())
}

/// Name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Set name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Code must be exactly four ASCII digits
fn validate_code(code: &str) -> DomainResult<()> {
    if code.len() != 4 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvariantViolation(format!(
            "Access code must be a 4-digit number, got {:?}",
            code
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the BookSet domain:
///
/// 1. Identity (id) is immutable after creation
/// 2. Name is unique case-insensitively across the store
/// 3. Code is a 4-digit numeric string, unique at creation time
/// 4. Book order is preserved except where an operation reorders it
/// 5. Created timestamp never changes
/// 6. Every mutation refreshes last_accessed

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_set() {
        let set = BookSet::new("Summer Reads", Vec::new(), "1234".to_string());
        assert!(validate_book_set(&set).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let set = BookSet::new("   ", Vec::new(), "1234".to_string());
        assert!(validate_book_set(&set).is_err());
    }

    #[test]
    fn test_bad_codes_fail() {
        for code in ["123", "12345", "12a4", ""] {
            let set = BookSet::new("A", Vec::new(), code.to_string());
            assert!(validate_book_set(&set).is_err(), "code {:?}", code);
        }
    }
}
