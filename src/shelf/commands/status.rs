use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{Book, Status};
use crate::store::BookStore;

/// Change only the circulation status of a stored book. When the stored
/// status already matches, nothing is written.
pub fn run<S: BookStore>(store: &mut S, id: u32, status: Status) -> Result<CmdResult> {
    let current = store.read_detail(id)?;
    let mut result = CmdResult::default();

    if current.status == status.as_str() {
        result.add_message(CmdMessage::info(format!(
            "Book #{id} is already {status}."
        )));
        result.rows.push(current);
        return Ok(result);
    }

    let year: i32 = current.year.parse().map_err(|_| {
        ShelfError::Store(format!("malformed year in catalog file: `{}`", current.year))
    })?;
    let book = Book::with_status(current.title, current.author, year, status)?;
    let row = store.update(id, &book)?;

    result.add_message(CmdMessage::success(format!(
        "Book #{} is now {}: {}",
        row.id, row.status, row.title
    )));
    result.rows.push(row);
    Ok(result)
}
