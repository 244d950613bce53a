//! Error types for data operations
//!
//! Provides unified error handling for schema edits, row edits, JSON import
//! and session storage.

use thiserror::Error;

/// Errors raised by a session storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The value does not fit in the remaining quota
    #[error("Storage quota exceeded: {needed} bytes (quota {quota})")]
    QuotaExceeded { needed: usize, quota: usize },

    /// The backend cannot be used at all (e.g. no session directory)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// Field name is empty or whitespace only
    #[error("Field name cannot be empty")]
    EmptyFieldName,

    /// A field with this name already exists
    #[error("Field name must be unique: \"{0}\" already exists")]
    DuplicateField(String),

    /// A required (non-number) field has no value in a new row
    #[error("Field \"{0}\" is required")]
    RequiredField(String),

    /// Charts need both a schema and at least one row
    #[error("You need to define a schema and add data before visualizing")]
    NothingToChart,

    /// Stale or out-of-range row index
    #[error("Row index {index} out of bounds (len {len})")]
    RowIndex { index: usize, len: usize },

    /// Stale or out-of-range field index
    #[error("Field index {index} out of bounds (len {len})")]
    FieldIndex { index: usize, len: usize },

    /// Import text is blank
    #[error("Please enter JSON data to import")]
    EmptyDocument,

    /// JSON parsing error from serde_json
    #[error("Error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// `schema` key missing or not an array
    #[error("Invalid JSON format: schema is missing or not an array")]
    SchemaShape,

    /// `data` key missing, not an array, or holding non-object rows
    #[error("Invalid JSON format: {0}")]
    DataShape(String),

    /// A schema entry is malformed
    #[error("Invalid schema: {0}")]
    FieldShape(String),

    /// Session storage failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Coarse classification used by callers to decide how to surface an error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Inline, non-fatal; the input was not applied
    Validation,
    /// Programming-contract violation (stale index)
    Index,
    /// Import aborted; existing state untouched
    Import,
    /// Persistence failure; in-memory state stays authoritative
    Storage,
}

impl DataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DataError::EmptyFieldName
            | DataError::DuplicateField(_)
            | DataError::RequiredField(_)
            | DataError::NothingToChart => ErrorKind::Validation,
            DataError::RowIndex { .. } | DataError::FieldIndex { .. } => ErrorKind::Index,
            DataError::EmptyDocument
            | DataError::Parse(_)
            | DataError::SchemaShape
            | DataError::DataShape(_)
            | DataError::FieldShape(_) => ErrorKind::Import,
            DataError::Storage(_) => ErrorKind::Storage,
        }
    }

    pub fn data_shape(detail: impl Into<String>) -> Self {
        DataError::DataShape(detail.into())
    }

    pub fn field_shape(detail: impl Into<String>) -> Self {
        DataError::FieldShape(detail.into())
    }
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
