use crate::error::{Result, ShelfError};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Circulation status of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    InStock,
    Given,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::InStock, Status::Given];

    /// Canonical on-disk spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InStock => "in-stock",
            Status::Given => "given",
        }
    }

    fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "in-stock" => Ok(Status::InStock),
            "given" => Ok(Status::Given),
            _ => Err(ShelfError::validation(
                "status",
                s,
                format!("must be one of: {}", Status::allowed()),
            )),
        }
    }
}

/// One catalog entry. Has no identity of its own: the store assigns the id
/// when the book is first persisted.
///
/// Values of this type only exist validated: construct through [`Book::new`]
/// or [`Book::with_status`], never field-by-field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: Status,
}

impl Book {
    /// Column order for the non-id fields, shared by every reader and writer
    /// of catalog rows.
    pub const FIELDS: [&'static str; 4] = ["title", "author", "year", "status"];

    /// Validates and builds a book with the default `in-stock` status.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Result<Self> {
        Self::with_status(title, author, year, Status::InStock)
    }

    /// Validates and builds a book. All fields must pass or no value exists.
    pub fn with_status(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        status: Status,
    ) -> Result<Self> {
        let title = non_blank("title", title.into())?;
        let author = non_blank("author", author.into())?;
        let current = Utc::now().year();
        if !(0..=current).contains(&year) {
            return Err(ShelfError::validation(
                "year",
                year.to_string(),
                format!("must be an integer between 0 and {current}"),
            ));
        }
        Ok(Self {
            title,
            author,
            year,
            status,
        })
    }
}

fn non_blank(field: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ShelfError::validation(
            field,
            value.clone(),
            "must be a non-empty string",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};

    #[test]
    fn builds_with_default_status() {
        let book = Book::new("Dune", "Frank Herbert", 1965).unwrap();
        assert_eq!(book.status, Status::InStock);
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn trims_title_and_author() {
        let book = Book::new("  Dune ", " Frank Herbert  ", 1965).unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
    }

    #[test]
    fn rejects_blank_title() {
        let err = Book::new("   ", "Frank Herbert", 1965).unwrap_err();
        assert!(matches!(
            err,
            ShelfError::Validation { ref field, .. } if field == "title"
        ));
    }

    #[test]
    fn rejects_blank_author() {
        let err = Book::new("Dune", "", 1965).unwrap_err();
        assert!(matches!(
            err,
            ShelfError::Validation { ref field, .. } if field == "author"
        ));
    }

    #[test]
    fn accepts_current_year_rejects_neighbors() {
        let current = Utc::now().year();
        assert!(Book::new("Dune", "Frank Herbert", current).is_ok());
        assert!(Book::new("Dune", "Frank Herbert", current + 1).is_err());
        assert!(Book::new("Dune", "Frank Herbert", -1).is_err());
        assert!(Book::new("Dune", "Frank Herbert", 0).is_ok());
    }

    #[test]
    fn status_parses_loosely_prints_canonically() {
        assert_eq!("in-stock".parse::<Status>().unwrap(), Status::InStock);
        assert_eq!("IN_STOCK".parse::<Status>().unwrap(), Status::InStock);
        assert_eq!("Given".parse::<Status>().unwrap(), Status::Given);
        assert_eq!(Status::InStock.to_string(), "in-stock");
    }

    #[test]
    fn unknown_status_names_allowed_values() {
        let err = "lost".parse::<Status>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("in-stock"));
        assert!(msg.contains("given"));
        assert!(msg.contains("lost"));
    }
}
