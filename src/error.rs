//! Error types for Elidune Shelf

use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::book::{BookId, LEND_DATE_FORMAT};

/// Main application error type.
///
/// The `Display` text of each variant is the message shown to the user at
/// the menu, so every failure can be reported and the session continued.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error: Book list file not found!")]
    SourceNotFound(PathBuf),

    #[error("Invalid Book ID!")]
    InvalidIdentifier(String),

    #[error("Book is already issued to {lender} on {}.", .lend_date.format(LEND_DATE_FORMAT))]
    AlreadyIssued {
        lender: String,
        lend_date: NaiveDateTime,
    },

    #[error("Book is already in the library!")]
    NotIssued(BookId),

    #[error("Book title cannot be empty!")]
    EmptyTitle,

    #[error("Book title must fit on a single line!")]
    InvalidTitle(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Short machine-readable name, used as a structured logging field
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::SourceNotFound(_) => "source_not_found",
            AppError::InvalidIdentifier(_) => "invalid_identifier",
            AppError::AlreadyIssued { .. } => "already_issued",
            AppError::NotIssued(_) => "not_issued",
            AppError::EmptyTitle => "empty_title",
            AppError::InvalidTitle(_) => "invalid_title",
            AppError::Io(_) => "io",
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
