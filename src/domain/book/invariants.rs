use super::entity::Book;
use crate::domain::{DomainError, DomainResult};

/// Validates all Book invariants
/// These are the absolute rules that must hold for a Book to be valid
pub fn validate_book(book: &Book) -> DomainResult<()> {
    validate_title(&book.title)?;
    validate_shelves(&book.shelves)?;
    Ok(())
}

/// Title cannot be empty
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Book title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Shelves must be non-empty strings with no duplicates
fn validate_shelves(shelves: &[String]) -> DomainResult<()> {
    for (i, shelf) in shelves.iter().enumerate() {
        if shelf.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "Shelf tag cannot be empty".to_string(),
            ));
        }
        if shelves[..i].contains(shelf) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate shelf tag: {}",
                shelf
            )));
        }
    }
    Ok(())
}

/// Invariants that must hold true for the Book domain:
///
/// 1. Title is required and non-empty
/// 2. Shelves contain no duplicates and no blank tags
/// 3. Rating and pages are string-encoded and never interpreted here
/// 4. Shelf order carries no meaning
