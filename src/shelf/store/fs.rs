use super::{BookStore, Row};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

const CSV_EXT: &str = "csv";

/// Production storage: one CSV file, header row first, one row per book.
///
/// The file handle is scoped to each operation; nothing stays open between
/// calls. Exactly one process is assumed to touch the file; concurrent
/// external writers are out of scope and would corrupt state.
#[derive(Debug)]
pub struct CsvStore {
    path: PathBuf,
    next_id: u32,
}

impl CsvStore {
    /// Open a catalog at `path`, creating a header-only file if none exists.
    ///
    /// The id counter is recovered by scanning existing rows; there is no
    /// separate counter file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !is_csv(&path) {
            return Err(ShelfError::Config(format!(
                "{} is not a CSV file",
                path.display()
            )));
        }
        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = File::create(&path)?;
            write_header(file)?;
        }
        let mut store = Self { path, next_id: 0 };
        store.next_id = store.max_id()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn max_id(&self) -> Result<u32> {
        Ok(self
            .read_rows()?
            .iter()
            .map(|row| parse_id(&row.id))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .max()
            .unwrap_or(0))
    }

    fn alloc_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn read_rows(&self) -> Result<Vec<Row>> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Rewrite the whole file from scratch. The format has no in-place
    /// variable-length row update, so update/delete pay the full rewrite.
    fn write_rows(&self, rows: &[Row]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(columns())?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn find(rows: &[Row], id: u32) -> Result<usize> {
        rows.iter()
            .position(|row| row.id == id.to_string())
            .ok_or(ShelfError::NotFound(id))
    }
}

impl BookStore for CsvStore {
    fn create(&mut self, book: &Book) -> Result<Row> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let empty = file.metadata()?.len() == 0;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if empty {
            writer.write_record(columns())?;
        }
        let row = Row::from_book(self.alloc_id(), book);
        writer.serialize(&row)?;
        writer.flush()?;
        Ok(row)
    }

    fn create_many(&mut self, books: &[Book]) -> Result<Vec<Row>> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let empty = file.metadata()?.len() == 0;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if empty {
            writer.write_record(columns())?;
        }
        let mut rows = Vec::with_capacity(books.len());
        for book in books {
            let row = Row::from_book(self.alloc_id(), book);
            writer.serialize(&row)?;
            rows.push(row);
        }
        writer.flush()?;
        Ok(rows)
    }

    fn read_list(&self) -> Result<Vec<Row>> {
        self.read_rows()
    }

    fn read_detail(&self, id: u32) -> Result<Row> {
        let rows = self.read_rows()?;
        let at = Self::find(&rows, id)?;
        Ok(rows[at].clone())
    }

    fn update(&mut self, id: u32, book: &Book) -> Result<Row> {
        let mut rows = self.read_rows()?;
        let at = Self::find(&rows, id)?;
        rows[at] = Row::from_book(id, book);
        self.write_rows(&rows)?;
        Ok(rows[at].clone())
    }

    fn delete(&mut self, id: u32) -> Result<Row> {
        let mut rows = self.read_rows()?;
        let at = Self::find(&rows, id)?;
        let removed = rows.remove(at);
        self.write_rows(&rows)?;
        Ok(removed)
    }
}

fn columns() -> [&'static str; 5] {
    ["id", Book::FIELDS[0], Book::FIELDS[1], Book::FIELDS[2], Book::FIELDS[3]]
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(CSV_EXT))
        .unwrap_or(false)
}

fn parse_id(raw: &str) -> Result<u32> {
    raw.parse()
        .map_err(|_| ShelfError::Store(format!("malformed id in catalog file: `{raw}`")))
}

fn write_header(file: File) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(columns())?;
    writer.flush()?;
    Ok(())
}
