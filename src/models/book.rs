//! Book (catalogue record) model and related types

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};

use super::enums::BookStatus;
use crate::error::AppError;

/// Display format of lending timestamps (second resolution)
pub const LEND_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum number of characters of a title shown in listings
pub const SHORT_TITLE_LEN: usize = 20;

/// Numeric book identifier, stable for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(u32);

impl BookId {
    /// Identifier given to the first book of an empty catalogue
    pub const FIRST: BookId = BookId(101);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Identifier following this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = AppError;

    /// Plain decimal digits only: ids are shown without sign or padding,
    /// so `+101` and `0101` name no book
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        if !canonical {
            return Err(AppError::InvalidIdentifier(s.to_string()));
        }
        digits
            .parse::<u32>()
            .map(BookId)
            .map_err(|_| AppError::InvalidIdentifier(s.to_string()))
    }
}

/// Who holds a book and since when
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lending {
    pub lender: String,
    pub lend_date: NaiveDateTime,
}

impl Lending {
    /// Record a lending, dropping sub-second precision from `now`
    pub fn new(lender: impl Into<String>, now: NaiveDateTime) -> Self {
        Self {
            lender: lender.into(),
            lend_date: now.with_nanosecond(0).unwrap_or(now),
        }
    }
}

/// One catalogued title with its lending state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub lending: Option<Lending>,
}

impl Book {
    /// New available book
    pub fn new(id: BookId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            lending: None,
        }
    }

    pub fn status(&self) -> BookStatus {
        match self.lending {
            Some(_) => BookStatus::Issued,
            None => BookStatus::Available,
        }
    }

    pub fn lender(&self) -> Option<&str> {
        self.lending.as_ref().map(|l| l.lender.as_str())
    }

    pub fn lend_date(&self) -> Option<NaiveDateTime> {
        self.lending.as_ref().map(|l| l.lend_date)
    }

    /// Title cut to at most [`SHORT_TITLE_LEN`] characters, for listings
    pub fn short_title(&self) -> &str {
        match self.title.char_indices().nth(SHORT_TITLE_LEN) {
            Some((idx, _)) => &self.title[..idx],
            None => &self.title,
        }
    }
}
