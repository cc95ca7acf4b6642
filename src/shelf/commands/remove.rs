use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let removed = store.delete(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book removed (#{}): {}",
        removed.id, removed.title
    )));
    result.rows.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, get, list};
    use crate::error::ShelfError;
    use crate::model::Book;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_exactly_one_row() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Book::new("Dune", "Frank Herbert", 1965).unwrap()).unwrap();
        add::run(&mut store, Book::new("Hyperion", "Dan Simmons", 1989).unwrap()).unwrap();

        let result = run(&mut store, 1).unwrap();
        assert_eq!(result.rows[0].title, "Dune");
        assert_eq!(list::run(&store).unwrap().rows.len(), 1);
        assert!(matches!(
            get::run(&store, 1).unwrap_err(),
            ShelfError::NotFound(1)
        ));
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, 9).unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(9)));
    }
}
