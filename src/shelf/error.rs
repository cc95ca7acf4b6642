use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("invalid `{field}`: {reason} (got: `{value}`)")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("no book with id {0}")]
    NotFound(u32),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("store error: {0}")]
    Store(String),
}

impl ShelfError {
    pub fn validation(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
