//! Repository layer for the backing title file

pub mod titles;

pub use titles::TitleStore;
