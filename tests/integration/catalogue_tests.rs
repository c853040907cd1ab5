//! Catalogue behaviour against the title file

use std::fs;

use elidune_shelf::{
    models::{BookId, BookStatus},
    repository::TitleStore,
    AppError, Catalogue,
};

use crate::{timestamp, title_file};

#[test]
fn test_load_numbers_every_line() {
    let (_dir, path) = title_file("Foo\nBar\n\nA Very Long Title That Goes On\n");
    let (catalogue, err) = Catalogue::load(TitleStore::new(&path));
    assert!(err.is_none());
    assert_eq!(catalogue.len(), 4);

    let ids: Vec<BookId> = catalogue.list().map(|b| b.id).collect();
    let expected: Vec<BookId> = (101..=104).map(BookId::new).collect();
    assert_eq!(ids, expected);

    let third = catalogue.get(BookId::new(103)).unwrap();
    assert_eq!(third.title, "");
    assert_eq!(third.status(), BookStatus::Available);

    let fourth = catalogue.get(BookId::new(104)).unwrap();
    assert_eq!(fourth.title, "A Very Long Title That Goes On");
    assert_eq!(fourth.short_title(), "A Very Long Title Th");
}

#[test]
fn test_lending_scenario() {
    let (_dir, path) = title_file("Foo\nBar\n");
    let (mut catalogue, _) = Catalogue::load(TitleStore::new(&path));
    let foo = BookId::new(101);
    let t = timestamp(10, 9, 15, 0);

    assert_eq!(catalogue.get(foo).unwrap().title, "Foo");
    assert_eq!(catalogue.get(BookId::new(102)).unwrap().title, "Bar");

    let book = catalogue.issue(foo, "Alice", t).unwrap();
    assert_eq!(book.lender(), Some("Alice"));
    assert_eq!(book.lend_date(), Some(t));
    assert_eq!(book.status(), BookStatus::Issued);

    match catalogue.issue(foo, "Bob", timestamp(11, 9, 0, 0)) {
        Err(AppError::AlreadyIssued { lender, lend_date }) => {
            assert_eq!(lender, "Alice");
            assert_eq!(lend_date, t);
        }
        other => panic!("expected AlreadyIssued, got {other:?}"),
    }

    let book = catalogue.return_book(foo).unwrap();
    assert_eq!(book.status(), BookStatus::Available);
    assert_eq!(book.lender(), None);
    assert_eq!(book.lend_date(), None);

    assert!(matches!(
        catalogue.issue(BookId::new(999), "Carl", timestamp(12, 9, 0, 0)),
        Err(AppError::InvalidIdentifier(_))
    ));
}

#[test]
fn test_added_titles_persist_but_lending_does_not() {
    let (_dir, path) = title_file("Foo\n");
    let (mut catalogue, _) = Catalogue::load(TitleStore::new(&path));

    catalogue.issue(BookId::new(101), "Alice", timestamp(3, 12, 0, 0)).unwrap();
    let added = catalogue.add_book("Dune").unwrap();
    assert_eq!(added.id, BookId::new(102));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Foo\nDune\n");

    // a fresh process sees the new title, and every book available again
    let (reloaded, _) = Catalogue::load(TitleStore::new(&path));
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.list().all(|b| b.status() == BookStatus::Available));
    assert_eq!(reloaded.get(BookId::new(102)).unwrap().title, "Dune");
}

#[test]
fn test_add_to_missing_source_creates_it() {
    let (dir, _) = title_file("");
    let path = dir.path().join("fresh.txt");
    let (mut catalogue, err) = Catalogue::load(TitleStore::new(&path));
    assert!(matches!(err, Some(AppError::SourceNotFound(_))));
    assert!(catalogue.is_empty());

    assert_eq!(catalogue.add_book("Dune").unwrap().id, BookId::new(101));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Dune\n");
}

#[test]
fn test_blank_titles_rejected() {
    let (_dir, path) = title_file("Foo\n");
    let (mut catalogue, _) = Catalogue::load(TitleStore::new(&path));

    for title in ["", "   ", "\t\n"] {
        assert!(matches!(catalogue.add_book(title), Err(AppError::EmptyTitle)));
    }
    assert_eq!(catalogue.len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "Foo\n");
}

#[test]
fn test_wrong_state_transitions_change_nothing() {
    let (_dir, path) = title_file("Foo\n");
    let (mut catalogue, _) = Catalogue::load(TitleStore::new(&path));
    let id = BookId::new(101);
    let before = catalogue.get(id).unwrap().clone();

    assert!(matches!(catalogue.return_book(id), Err(AppError::NotIssued(_))));
    assert_eq!(catalogue.get(id).unwrap(), &before);
}
