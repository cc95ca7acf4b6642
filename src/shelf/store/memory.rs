use super::{BookStore, Row};
use crate::error::{Result, ShelfError};
use crate::model::Book;

/// In-memory storage for testing. Does NOT persist data.
///
/// Keeps the same id discipline as [`super::fs::CsvStore`]: ids start at 1,
/// grow strictly, and survive deletion of their row.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Vec<Row>,
    next_id: u32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, id: u32) -> Result<usize> {
        self.rows
            .iter()
            .position(|row| row.id == id.to_string())
            .ok_or(ShelfError::NotFound(id))
    }
}

impl BookStore for InMemoryStore {
    fn create(&mut self, book: &Book) -> Result<Row> {
        self.next_id += 1;
        let row = Row::from_book(self.next_id, book);
        self.rows.push(row.clone());
        Ok(row)
    }

    fn read_list(&self) -> Result<Vec<Row>> {
        Ok(self.rows.clone())
    }

    fn read_detail(&self, id: u32) -> Result<Row> {
        Ok(self.rows[self.find(id)?].clone())
    }

    fn update(&mut self, id: u32, book: &Book) -> Result<Row> {
        let at = self.find(id)?;
        self.rows[at] = Row::from_book(id, book);
        Ok(self.rows[at].clone())
    }

    fn delete(&mut self, id: u32) -> Result<Row> {
        let at = self.find(id)?;
        Ok(self.rows.remove(at))
    }
}
