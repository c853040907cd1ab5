//! Data models for Elidune Shelf

pub mod book;
pub mod enums;

// Re-export commonly used types
pub use book::{Book, BookId, Lending};
pub use enums::BookStatus;
