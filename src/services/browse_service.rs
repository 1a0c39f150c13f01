// src/services/browse_service.rs
//
// Browse Service - shelf index, shelf filtering, shuffle.
//
// Pure, dependency-free operations over book slices; never touches
// storage. Shuffle is the one non-deterministic operation in the crate.

use std::collections::BTreeSet;

use rand::Rng;

use crate::domain::book::Book;

#[derive(Default)]
pub struct BrowseService;

impl BrowseService {
    pub fn new() -> Self {
        Self
    }

    /// Sorted, duplicate-free list of every shelf tag across the records.
    pub fn shelf_index(&self, books: &[Book]) -> Vec<String> {
        let mut shelves = BTreeSet::new();
        for book in books {
            for shelf in &book.shelves {
                shelves.insert(shelf.clone());
            }
        }
        shelves.into_iter().collect()
    }

    /// Records whose shelf list intersects `selected`, in input order.
    /// An empty selection means "no filter" and returns everything.
    pub fn filter_by_shelves(&self, books: &[Book], selected: &[String]) -> Vec<Book> {
        if selected.is_empty() {
            return books.to_vec();
        }
        books
            .iter()
            .filter(|book| selected.iter().any(|shelf| book.shelves.contains(shelf)))
            .cloned()
            .collect()
    }

    /// Some permutation of the input: every record draws a random key up
    /// front and the list is sorted by those keys. Not uniformly random
    /// and not guaranteed to differ from the input; good enough for
    /// "surprise me with a next read".
    pub fn shuffle(&self, books: &[Book]) -> Vec<Book> {
        let mut rng = rand::rng();
        let mut keyed: Vec<(u32, Book)> = books
            .iter()
            .map(|book| (rng.random::<u32>(), book.clone()))
            .collect();
        keyed.sort_by_key(|&(key, _)| key);
        keyed.into_iter().map(|(_, book)| book).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelved(title: &str, shelves: &[&str]) -> Book {
        let mut book = Book::new(title, "");
        for shelf in shelves {
            book.add_shelf(*shelf);
        }
        book
    }

    #[test]
    fn test_shelf_index_is_sorted_and_deduped() {
        let books = vec![
            shelved("A", &["sci-fi", "classics"]),
            shelved("B", &["classics", "poetry"]),
        ];
        let index = BrowseService::new().shelf_index(&books);
        assert_eq!(index, vec!["classics", "poetry", "sci-fi"]);
    }

    #[test]
    fn test_empty_selection_returns_everything() {
        let books = vec![shelved("A", &["x"]), shelved("B", &[])];
        let filtered = BrowseService::new().filter_by_shelves(&books, &[]);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_keeps_intersecting_records_in_order() {
        let books = vec![
            shelved("A", &["sci-fi"]),
            shelved("B", &["poetry"]),
            shelved("C", &["sci-fi", "favorites"]),
        ];
        let selected = vec!["sci-fi".to_string()];
        let titles: Vec<String> = BrowseService::new()
            .filter_by_shelves(&books, &selected)
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_filter_with_unknown_shelf_is_empty() {
        let books = vec![shelved("A", &["sci-fi"])];
        let selected = vec!["cooking".to_string()];
        assert!(BrowseService::new()
            .filter_by_shelves(&books, &selected)
            .is_empty());
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let books: Vec<Book> = (0..20)
            .map(|i| Book::new(format!("Book {}", i), ""))
            .collect();
        let shuffled = BrowseService::new().shuffle(&books);

        assert_eq!(shuffled.len(), books.len());
        let mut sorted_input: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        let mut sorted_output: Vec<&str> = shuffled.iter().map(|b| b.title.as_str()).collect();
        sorted_input.sort();
        sorted_output.sort();
        assert_eq!(sorted_input, sorted_output);
    }

    #[test]
    fn test_shuffle_of_empty_input_is_empty() {
        assert!(BrowseService::new().shuffle(&[]).is_empty());
    }

    #[test]
    fn test_repeated_shuffles_always_return_a_permutation() {
        // shuffling must never fail on an ordinary list, however often
        // it runs
        let books: Vec<Book> = (0..100)
            .map(|i| Book::new(format!("Book {}", i), ""))
            .collect();
        let mut expected: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        expected.sort();

        let service = BrowseService::new();
        for _ in 0..50 {
            let shuffled = service.shuffle(&books);
            let mut titles: Vec<&str> = shuffled.iter().map(|b| b.title.as_str()).collect();
            titles.sort();
            assert_eq!(titles, expected);
        }
    }
}
