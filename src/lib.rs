// src/lib.rs
// BookHub - Local-first book library and reading-set manager
//
// Architecture:
// - Domain-centric: entities and their invariants live in `domain`
// - Injected storage: one narrow key-value interface, no global state
// - Explicit: repositories are dumb mappers, services orchestrate
// - Local-first: user controls all data, nothing leaves the machine
// - Presentation-free: rendering, dialogs and file pickers are the
//   embedding frontend's concern; this crate exposes data operations

// ============================================================================
// MODULES
// ============================================================================

pub mod application;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod storage;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{validate_book, validate_book_set, Book, BookSet, DomainError, DomainResult};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Storage & Repositories
// ============================================================================

pub use repositories::{KvSetRepository, SetRepository};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

// ============================================================================
// PUBLIC API - Services & Composition Root
// ============================================================================

pub use application::AppState;
pub use services::{BrowseService, CreateSetRequest, ImportService, SetService};
