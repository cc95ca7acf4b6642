use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStore;

pub fn run<S: BookStore>(store: &S) -> Result<CmdResult> {
    let rows = store.read_list()?;
    let mut result = CmdResult::default().with_rows(rows);
    if result.rows.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    Ok(result)
}
