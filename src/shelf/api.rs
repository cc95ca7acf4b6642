//! # API Facade
//!
//! The single entry point for every catalog operation, regardless of the UI
//! driving it. A thin dispatch layer: no business logic, no I/O, no
//! presentation; those live in `commands/*.rs` and the CLI respectively.
//!
//! `ShelfApi<S: BookStore>` is generic over the storage backend:
//! - Production: `ShelfApi<CsvStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Book, Status};
use crate::store::BookStore;

pub struct ShelfApi<S: BookStore> {
    store: S,
}

impl<S: BookStore> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_book(&mut self, book: Book) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, book)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn get_book(&self, id: u32) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn search_books(&self, field: &str, value: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, field, value)
    }

    pub fn update_book(&mut self, id: u32, book: Book) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, book)
    }

    pub fn set_status(&mut self, id: u32, status: Status) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.store, id, status)
    }

    pub fn remove_book(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_through_the_store() {
        let mut api = ShelfApi::new(InMemoryStore::new());
        api.add_book(Book::new("Dune", "Frank Herbert", 1965).unwrap())
            .unwrap();

        assert_eq!(api.list_books().unwrap().rows.len(), 1);
        assert_eq!(api.get_book(1).unwrap().rows[0].title, "Dune");

        api.set_status(1, Status::Given).unwrap();
        assert_eq!(api.get_book(1).unwrap().rows[0].status, "given");

        api.remove_book(1).unwrap();
        assert!(api.list_books().unwrap().rows.is_empty());
    }
}
