// src/services/set_service.rs
//
// Set Service - the keyed store of named book collections.
//
// CRITICAL RULES:
// - Absent ids and out-of-range indexes are `None`, never errors
// - Every successful fetch or mutation refreshes last_accessed
// - Uniqueness of caller-supplied names/codes is the caller's contract,
//   checked up front via name_exists/code_exists
// - Internally generated codes are retried until unused

use std::sync::Arc;

use rand::Rng;

use crate::domain::book::Book;
use crate::domain::book_set::{validate_book_set, BookSet};
use crate::error::{AppError, AppResult};
use crate::repositories::SetRepository;

#[derive(Debug, Clone)]
pub struct CreateSetRequest {
    pub name: String,
    pub books: Vec<Book>,
    /// Pre-validated caller-supplied code; generated when `None`.
    pub code: Option<String>,
}

pub struct SetService {
    repo: Arc<dyn SetRepository>,
}

impl SetService {
    pub fn new(repo: Arc<dyn SetRepository>) -> Self {
        Self { repo }
    }

    /// Draw a 4-digit access code (1000-9999), independently each call.
    /// Not guaranteed unused; see `code_exists`.
    pub fn generate_code(&self) -> String {
        rand::rng().random_range(1000..=9999).to_string()
    }

    /// Whether any stored set already uses this code.
    pub fn code_exists(&self, code: &str) -> AppResult<bool> {
        let sets = self.repo.list_all()?;
        Ok(sets.iter().any(|s| s.code == code))
    }

    /// Whether any stored set already uses this name (case-insensitive).
    pub fn name_exists(&self, name: &str) -> AppResult<bool> {
        let wanted = name.to_lowercase();
        let sets = self.repo.list_all()?;
        Ok(sets.iter().any(|s| s.name.to_lowercase() == wanted))
    }

    /// Create and persist a new set.
    ///
    /// A caller-supplied code is stored as given; uniqueness of both name
    /// and code is expected to have been checked by the caller. When no
    /// code is supplied, one is generated and retried until unused.
    pub fn create_set(&self, request: CreateSetRequest) -> AppResult<BookSet> {
        let code = match request.code {
            Some(code) => code,
            None => self.generate_unused_code()?,
        };

        let set = BookSet::new(&request.name, request.books, code);
        validate_book_set(&set).map_err(AppError::Domain)?;
        self.repo.save(&set)?;

        log::info!("created set {} ({} books)", set.id, set.books.len());
        Ok(set)
    }

    /// Fetch by name (case-insensitive) and exact code. A hit counts as
    /// an access: last_accessed is refreshed and persisted before the set
    /// is returned. A miss has no side effects.
    pub fn get_set(&self, name: &str, code: &str) -> AppResult<Option<BookSet>> {
        let wanted = name.to_lowercase();
        let sets = self.repo.list_all()?;
        let found = sets
            .into_iter()
            .find(|s| s.name.to_lowercase() == wanted && s.code == code);

        match found {
            Some(mut set) => {
                set.touch();
                self.repo.save(&set)?;
                Ok(Some(set))
            }
            None => Ok(None),
        }
    }

    /// Append a book to the set's sequence.
    pub fn add_book_to_set(&self, id: &str, book: Book) -> AppResult<Option<BookSet>> {
        let mut set = match self.repo.get_by_id(id)? {
            Some(set) => set,
            None => return Ok(None),
        };

        set.books.push(book);
        set.touch();
        self.repo.save(&set)?;
        Ok(Some(set))
    }

    /// Remove the book at `index` (0-based). `None` when the id is
    /// unknown or the index is out of bounds; relative order of the
    /// remaining books is preserved.
    pub fn remove_book_from_set(&self, id: &str, index: usize) -> AppResult<Option<BookSet>> {
        let mut set = match self.repo.get_by_id(id)? {
            Some(set) => set,
            None => return Ok(None),
        };

        if index >= set.books.len() {
            return Ok(None);
        }

        set.books.remove(index);
        set.touch();
        self.repo.save(&set)?;
        Ok(Some(set))
    }

    /// Replace the whole book sequence.
    pub fn replace_set_books(&self, id: &str, books: Vec<Book>) -> AppResult<Option<BookSet>> {
        let mut set = match self.repo.get_by_id(id)? {
            Some(set) => set,
            None => return Ok(None),
        };

        set.books = books;
        set.touch();
        self.repo.save(&set)?;
        Ok(Some(set))
    }

    /// Persist an already-mutated set in place. `None` (and no write)
    /// when no stored set has this id.
    pub fn update_set(&self, mut set: BookSet) -> AppResult<Option<BookSet>> {
        if self.repo.get_by_id(&set.id)?.is_none() {
            return Ok(None);
        }

        set.touch();
        self.repo.save(&set)?;
        Ok(Some(set))
    }

    /// Remove the set permanently. No-op when absent.
    pub fn delete_set(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id)?;
        log::info!("deleted set {}", id);
        Ok(())
    }

    /// Every stored set; empty when storage is empty or unreadable.
    pub fn list_all(&self) -> AppResult<Vec<BookSet>> {
        self.repo.list_all()
    }

    // With 9000 possible codes and personal-library set counts this
    // terminates almost immediately.
    fn generate_unused_code(&self) -> AppResult<String> {
        loop {
            let code = self.generate_code();
            if !self.code_exists(&code)? {
                return Ok(code);
            }
        }
    }
}
