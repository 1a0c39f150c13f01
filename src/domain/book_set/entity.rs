use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::book::Book;

/// A named, code-protected snapshot of a book collection.
/// Sets are created once and thereafter only mutated in place or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSet {
    /// Internal immutable identifier, derived from the slugged name plus
    /// the creation time in milliseconds. The only stable handle for
    /// mutation operations.
    pub id: String,

    /// Human-chosen set name, unique case-insensitively across the store
    pub name: String,

    /// 4-digit numeric access code
    pub code: String,

    /// Book sequence; order is significant (display/shuffle order)
    pub books: Vec<Book>,

    /// Creation timestamp, never changes
    pub created_at: DateTime<Utc>,

    /// Updated on every successful fetch or mutation
    pub last_accessed: DateTime<Utc>,
}

impl BookSet {
    /// Create a new BookSet. The id is derived here and never changes.
    pub fn new(name: &str, books: Vec<Book>, code: String) -> Self {
        let now = Utc::now();
        Self {
            id: derive_id(name, now),
            name: name.trim().to_string(),
            code,
            books,
            created_at: now,
            last_accessed: now,
        }
    }

    /// Record an access or mutation.
    pub fn touch(&mut self) {
        self.last_accessed = Utc::now();
    }
}

/// Slug the name and append the creation time in milliseconds,
/// e.g. "My Books" -> "my-books-1714070000000". Uniqueness comes from
/// the millisecond timestamp, not the slug.
fn derive_id(name: &str, created_at: DateTime<Utc>) -> String {
    let slug = name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-{}", slug, created_at.timestamp_millis())
}

impl std::fmt::Display for BookSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} books)", self.name, self.books.len())
    }
}
