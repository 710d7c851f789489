use std::path::PathBuf;

use thiserror::Error;

/// Failures of the persistent key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised by the book collection.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("no book with id {0}")]
    NotFound(String),

    #[error("a book with id {0} already exists")]
    DuplicateId(String),

    #[error("error parsing JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("invalid JSON file format: expected an array of books")]
    InvalidFormat,

    #[error("failed to serialize books: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to access {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Rejections at the input boundary, before the collection is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    #[error("total pages must be greater than 0, got {0}")]
    TotalPages(i64),

    #[error("pages read must be between 0 and {total}, got {read}")]
    PagesRead { read: i64, total: i64 },

    #[error("rating must be between 1 and 5, got {0}")]
    Rating(i64),
}
