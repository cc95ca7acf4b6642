use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S, id: u32) -> Result<CmdResult> {
    let row = store.read_detail(id)?;
    Ok(CmdResult::default().with_rows(vec![row]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::ShelfError;
    use crate::model::Book;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn returns_matching_row() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Book::new("Dune", "Frank Herbert", 1965).unwrap()).unwrap();

        let result = run(&store, 1).unwrap();
        assert_eq!(result.rows[0].title, "Dune");
        assert_eq!(result.rows[0].year, "1965");
    }

    #[test]
    fn missing_id_is_not_found() {
        let store = InMemoryStore::new();
        let err = run(&store, 42).unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(42)));
    }
}
