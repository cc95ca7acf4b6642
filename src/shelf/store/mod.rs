//! # Storage Layer
//!
//! The [`BookStore`] trait is the contract every catalog backend satisfies.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing command logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: production storage, a single UTF-8 CSV file with a
//!   header row and one row per book
//! - [`memory::InMemoryStore`]: no persistence, fast isolated tests
//!
//! ## Row Mappings
//!
//! Read operations hand back [`Row`] values: every column as the string that
//! sits in the file, `id` and `year` included. The file format has no native
//! types, and the store does not pretend otherwise. Callers that need
//! numeric comparison convert at the edge.
//!
//! ## Identifier Allocation
//!
//! The store owns the id counter. Ids start at 1, grow strictly, and are
//! never handed out twice; deleting a book retires its id for good.

use crate::error::{Result, ShelfError};
use crate::model::Book;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// One stored row, every value as written to disk.
///
/// Field order mirrors the file's column order: `id` first, then
/// [`Book::FIELDS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: String,
    pub status: String,
}

impl Row {
    pub fn from_book(id: u32, book: &Book) -> Self {
        Self {
            id: id.to_string(),
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.to_string(),
            status: book.status.to_string(),
        }
    }

    /// Column access by name, `id` included.
    pub fn get(&self, field: &str) -> Option<&str> {
        match field {
            "id" => Some(&self.id),
            "title" => Some(&self.title),
            "author" => Some(&self.author),
            "year" => Some(&self.year),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}

/// Abstract interface for catalog storage.
///
/// Implementations own identifier allocation and must keep the live row set
/// and the persisted rows in 1:1 correspondence.
pub trait BookStore {
    /// Persist one book, assigning the next id. Returns the row as written.
    fn create(&mut self, book: &Book) -> Result<Row>;

    /// Persist a batch, ids strictly increasing across it. Rows are written
    /// incrementally; a failure mid-batch leaves the earlier rows in place.
    fn create_many(&mut self, books: &[Book]) -> Result<Vec<Row>> {
        books.iter().map(|book| self.create(book)).collect()
    }

    /// Every stored row, in file order.
    fn read_list(&self) -> Result<Vec<Row>>;

    /// The single row with the given id.
    fn read_detail(&self, id: u32) -> Result<Row>;

    /// Replace the non-id fields of an existing row, keeping its id and
    /// position. Returns the new row.
    fn update(&mut self, id: u32, book: &Book) -> Result<Row>;

    /// Remove an existing row permanently. Returns the removed row; the id
    /// is never reassigned.
    fn delete(&mut self, id: u32) -> Result<Row>;

    /// Case-insensitive substring match of `value` against one column,
    /// matches in file order. `field` must be one of [`Book::FIELDS`]; the
    /// check happens before any row is read.
    fn search(&self, field: &str, value: &str) -> Result<Vec<Row>> {
        if !Book::FIELDS.contains(&field) {
            return Err(ShelfError::validation(
                "field",
                field,
                format!("not a searchable field, expected one of: {}", Book::FIELDS.join(", ")),
            ));
        }
        let needle = value.to_lowercase();
        Ok(self
            .read_list()?
            .into_iter()
            .filter(|row| {
                row.get(field)
                    .map(|v| v.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .collect())
    }
}
