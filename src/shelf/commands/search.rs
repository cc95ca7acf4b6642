use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S, field: &str, value: &str) -> Result<CmdResult> {
    let rows = store.search(field, value)?;
    let mut result = CmdResult::default().with_rows(rows);
    if result.rows.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No books matched `{value}` in `{field}`."
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::ShelfError;
    use crate::model::Book;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for (title, author) in [
            ("Dune", "Frank Herbert"),
            ("Dune Messiah", "Frank Herbert"),
            ("Hyperion", "Dan Simmons"),
        ] {
            add::run(&mut store, Book::new(title, author, 1977).unwrap()).unwrap();
        }
        store
    }

    #[test]
    fn matches_substring_case_insensitively() {
        let store = seeded();
        let result = run(&store, "title", "dune").unwrap();
        let titles: Vec<_> = result.rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Dune Messiah"]);
    }

    #[test]
    fn no_match_yields_message_not_error() {
        let store = seeded();
        let result = run(&store, "author", "asimov").unwrap();
        assert!(result.rows.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn unknown_field_is_a_validation_error() {
        let store = seeded();
        let err = run(&store, "isbn", "x").unwrap_err();
        assert!(matches!(err, ShelfError::Validation { .. }));
    }
}
