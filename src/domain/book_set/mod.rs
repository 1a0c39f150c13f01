pub mod entity;
pub mod invariants;

pub use entity::BookSet;
pub use invariants::validate_book_set;
