use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &mut S, id: u32, book: Book) -> Result<CmdResult> {
    let row = store.update(id, &book)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book updated (#{}): {}",
        row.id, row.title
    )));
    result.rows.push(row);
    Ok(result)
}
