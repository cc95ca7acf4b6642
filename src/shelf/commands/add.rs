use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, book: Book) -> Result<CmdResult> {
    let row = store.create(&book)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added (#{}): {}",
        row.id, row.title
    )));
    result.rows.push(row);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_and_reports_assigned_id() {
        let mut store = InMemoryStore::new();
        let book = Book::new("Dune", "Frank Herbert", 1965).unwrap();
        let result = run(&mut store, book).unwrap();

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].id, "1");
        assert!(result.messages[0].content.contains("#1"));
        assert_eq!(store.read_list().unwrap().len(), 1);
    }
}
