// src/services/import_service.rs
//
// Import Service
//
// Normalizes a raw book-library CSV export into typed Book records.
//
// CRITICAL RULES:
// - Deterministic: same input → same output
// - Header names match verbatim, including case
// - Malformed rows are dropped silently, never surfaced as errors
// - Does NOT touch storage

use std::collections::HashSet;

use crate::domain::book::Book;

/// Number of `shelf N` columns recognized in an export.
const SHELF_COLUMNS: usize = 15;

/// Column indexes resolved from the header row. `None` means the column
/// is absent and the target field takes its default.
struct CsvColumns {
    title: Option<usize>,
    author: Option<usize>,
    rating: Option<usize>,
    pages: Option<usize>,
    date_read: Option<usize>,
    date_added: Option<usize>,
    shelves: Vec<usize>,
    width: usize,
}

impl CsvColumns {
    /// The header row is split on plain commas; header names are
    /// stripped of quote characters and trimmed before matching.
    fn from_header(line: &str) -> Self {
        let headers: Vec<String> = line
            .split(',')
            .map(|h| h.replace('"', "").trim().to_string())
            .collect();
        let find = |name: &str| headers.iter().position(|h| h.as_str() == name);

        Self {
            title: find("Title"),
            author: find("Author"),
            rating: find("My Rating"),
            pages: find("Number of Pages"),
            date_read: find("Date Read"),
            date_added: find("Date Added"),
            shelves: (1..=SHELF_COLUMNS)
                .filter_map(|n| find(&format!("shelf {}", n)))
                .collect(),
            width: headers.len(),
        }
    }
}

#[derive(Default)]
pub struct ImportService;

impl ImportService {
    pub fn new() -> Self {
        Self
    }

    /// Normalize raw CSV text into book records.
    ///
    /// The first line is the header row. Rows with fewer fields than the
    /// header, and rows without a title, are dropped; retained rows come
    /// out in input order.
    pub fn normalize(&self, raw_text: &str) -> Vec<Book> {
        let mut lines = raw_text.split('\n');
        let header = match lines.next() {
            Some(header) => header,
            None => return Vec::new(),
        };
        let columns = CsvColumns::from_header(header);

        let mut books = Vec::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields = split_fields(line);
            if fields.len() < columns.width {
                log::debug!(
                    "dropping malformed row: {} of {} fields",
                    fields.len(),
                    columns.width
                );
                continue;
            }

            let field = |index: Option<usize>, default: &str| -> String {
                index
                    .and_then(|i| fields.get(i))
                    .filter(|v| !v.is_empty())
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| default.to_string())
            };

            let title = field(columns.title, "");
            if title.is_empty() {
                continue;
            }

            books.push(Book {
                title,
                author: field(columns.author, ""),
                rating: field(columns.rating, "0"),
                pages: field(columns.pages, ""),
                date_read: field(columns.date_read, ""),
                date_added: field(columns.date_added, ""),
                shelves: collect_shelves(&columns, &fields),
            });
        }

        books
    }
}

/// Gather shelf tags from the shelf columns, dropping blanks and
/// duplicates. First-seen order is kept.
fn collect_shelves(columns: &CsvColumns, fields: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut shelves = Vec::new();
    for &i in &columns.shelves {
        if let Some(tag) = fields.get(i) {
            let tag = tag.trim();
            if !tag.is_empty() && seen.insert(tag.to_string()) {
                shelves.push(tag.to_string());
            }
        }
    }
    shelves
}

/// Split one data line into trimmed fields. A double quote toggles the
/// in-quotes state and is stripped from the value; commas separate
/// fields only outside quotes. Escaped quotes within quoted fields are
/// not supported by the export format.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}
