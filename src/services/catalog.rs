//! Catalogue service: the in-memory book collection and its lending operations

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookId, Lending},
    repository::TitleStore,
};

/// All book records of the running process, keyed by id.
///
/// Built once from the title file. Issue and return only change memory;
/// adding a book also appends its title to the file.
#[derive(Debug)]
pub struct Catalogue {
    store: TitleStore,
    books: BTreeMap<BookId, Book>,
}

impl Catalogue {
    /// Empty catalogue backed by `store`
    pub fn empty(store: TitleStore) -> Self {
        Self {
            store,
            books: BTreeMap::new(),
        }
    }

    /// Load every title of the store, numbering them from 101 in file order.
    ///
    /// A store that cannot be read yields an empty catalogue together with
    /// the error, so the caller can report it and carry on.
    pub fn load(store: TitleStore) -> (Self, Option<AppError>) {
        let titles = match store.read_titles() {
            Ok(titles) => titles,
            Err(e) => {
                tracing::warn!(
                    path = %store.path().display(),
                    kind = e.kind(),
                    "Could not load title file: {}",
                    e
                );
                return (Self::empty(store), Some(e));
            }
        };

        let mut books = BTreeMap::new();
        let mut id = BookId::FIRST;
        for title in titles {
            books.insert(id, Book::new(id, title.trim()));
            id = id.next();
        }

        tracing::info!("Loaded {} books from {}", books.len(), store.path().display());
        (Self { store, books }, None)
    }

    /// All books in id order. Call again to iterate again.
    pub fn list(&self) -> impl Iterator<Item = &Book> + '_ {
        self.books.values()
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn store(&self) -> &TitleStore {
        &self.store
    }

    /// Check that `id` exists and is available, without changing anything
    pub fn check_issuable(&self, id: BookId) -> AppResult<()> {
        let book = self
            .books
            .get(&id)
            .ok_or_else(|| AppError::InvalidIdentifier(id.to_string()))?;

        match &book.lending {
            Some(lending) => Err(AppError::AlreadyIssued {
                lender: lending.lender.clone(),
                lend_date: lending.lend_date,
            }),
            None => Ok(()),
        }
    }

    /// Lend an available book to `borrower` at `now`
    pub fn issue(&mut self, id: BookId, borrower: &str, now: NaiveDateTime) -> AppResult<&Book> {
        self.check_issuable(id)?;

        let book = self
            .books
            .get_mut(&id)
            .ok_or_else(|| AppError::InvalidIdentifier(id.to_string()))?;
        book.lending = Some(Lending::new(borrower, now));

        tracing::info!(book_id = %id, lender = borrower, "Book issued");
        Ok(&*book)
    }

    /// Add a title under the next free id and append it to the title file
    pub fn add_book(&mut self, title: &str) -> AppResult<&Book> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::EmptyTitle);
        }
        // one title per line in the store, no escaping
        if title.contains(['\n', '\r']) {
            return Err(AppError::InvalidTitle(title.to_string()));
        }

        self.store.append_title(title)?;

        let id = self.next_id();
        tracing::info!(book_id = %id, "Book '{}' added", title);
        Ok(&*self.books.entry(id).or_insert_with(|| Book::new(id, title)))
    }

    /// Mark an issued book as back in the library
    pub fn return_book(&mut self, id: BookId) -> AppResult<&Book> {
        let book = self
            .books
            .get_mut(&id)
            .ok_or_else(|| AppError::InvalidIdentifier(id.to_string()))?;

        match book.lending.take() {
            Some(lending) => {
                tracing::info!(book_id = %id, lender = %lending.lender, "Book returned");
                Ok(&*book)
            }
            None => Err(AppError::NotIssued(id)),
        }
    }

    fn next_id(&self) -> BookId {
        self.books
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(BookId::FIRST)
    }
}
