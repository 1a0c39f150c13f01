use serde::{Deserialize, Serialize};

/// A single book record, as produced by CSV import or manual entry.
/// Numeric-looking fields stay string-encoded: they come straight from the
/// export and are only ever displayed, never computed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Book title (required, never empty for a valid record)
    pub title: String,

    /// Author name (may be empty)
    pub author: String,

    /// User rating, string-encoded ("0" when unrated)
    pub rating: String,

    /// Page count, string-encoded (empty when unknown)
    pub pages: String,

    /// Date the book was finished (empty when unread)
    pub date_read: String,

    /// Date the book entered the library (empty when unknown)
    pub date_added: String,

    /// Shelf tags, duplicate-free; order is not significant
    pub shelves: Vec<String>,
}

impl Book {
    /// Create a new Book with only a title and author.
    /// Remaining fields take their import defaults.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            rating: "0".to_string(),
            pages: String::new(),
            date_read: String::new(),
            date_added: String::new(),
            shelves: Vec::new(),
        }
    }

    /// Attach a shelf tag, ignoring blanks and duplicates.
    pub fn add_shelf(&mut self, shelf: impl Into<String>) {
        let shelf = shelf.into();
        let shelf = shelf.trim();
        if shelf.is_empty() {
            return;
        }
        if !self.shelves.iter().any(|s| s == shelf) {
            self.shelves.push(shelf.to_string());
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
