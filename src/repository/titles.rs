//! Title file storage: one book title per line

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Line-oriented text file holding the catalogue titles.
///
/// Only titles are stored here; lending state lives in memory.
#[derive(Debug, Clone)]
pub struct TitleStore {
    path: PathBuf,
}

impl TitleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line of the file, blank lines included
    pub fn read_titles(&self) -> AppResult<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppError::SourceNotFound(self.path.clone()),
            _ => AppError::Io(e),
        })?;

        let titles = split_lines(&content);
        tracing::debug!(path = %self.path.display(), count = titles.len(), "Read title file");
        Ok(titles)
    }

    /// Append one title as a new line, creating the file if needed
    pub fn append_title(&self, title: &str) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", title)?;
        file.flush()?;
        Ok(())
    }
}

/// Split on `\n`, `\r\n` and lone `\r`; a final terminator ends the last
/// line rather than starting an empty one
fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_string)
        .collect()
}
