//! Elidune Shelf
//!
//! A single-user library catalogue: book titles come from a flat text file,
//! lending state is kept in memory, and everything is driven from a text menu.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Catalogue;
