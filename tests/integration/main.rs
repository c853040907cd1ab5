//! Integration tests for Elidune Shelf
//!
//! Every test works on a real title file in a temporary directory.

mod catalogue_tests;

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

/// Temporary directory holding a `list_of_books.txt` with `content`
pub fn title_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("list_of_books.txt");
    fs::write(&path, content).expect("Failed to write title file");
    (dir, path)
}

pub fn timestamp(day: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid timestamp")
}
