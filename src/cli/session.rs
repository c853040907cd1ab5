//! Interactive menu loop driving the catalogue

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDateTime};

use super::commands::Command;
use crate::{models::book::BookId, services::Catalogue};

/// Source of lending timestamps
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Blocking request/response session over a reader and a writer.
///
/// Domain errors are printed and the loop goes on; only failures of the
/// terminal streams themselves end it early.
pub struct Session<'a, R, W, C = LocalClock> {
    catalogue: &'a mut Catalogue,
    input: R,
    output: W,
    clock: C,
    library_name: String,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W, LocalClock> {
    pub fn new(
        catalogue: &'a mut Catalogue,
        input: R,
        output: W,
        library_name: impl Into<String>,
    ) -> Self {
        Self::with_clock(catalogue, input, output, library_name, LocalClock)
    }
}

impl<'a, R: BufRead, W: Write, C: Clock> Session<'a, R, W, C> {
    pub fn with_clock(
        catalogue: &'a mut Catalogue,
        input: R,
        output: W,
        library_name: impl Into<String>,
        clock: C,
    ) -> Self {
        Self {
            catalogue,
            input,
            output,
            clock,
            library_name: library_name.into(),
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let flow = match choice.parse::<Command>() {
                Ok(command) => {
                    tracing::debug!(?command, "Menu command");
                    self.dispatch(command)?
                }
                Err(_) => {
                    writeln!(self.output, "Invalid choice! Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "Exiting Library System...")?;
        self.output.flush()
    }

    fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Display => {
                self.display_books()?;
                Ok(Flow::Continue)
            }
            Command::Issue => self.issue_book(),
            Command::Add => self.add_book(),
            Command::Return => self.return_book(),
            Command::Quit => Ok(Flow::Quit),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- {} Menu ---", self.library_name)?;
        for command in Command::ALL {
            writeln!(self.output, "Press {} to {}", command.key(), command.description())?;
        }
        Ok(())
    }

    fn display_books(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n------ Available Books ------")?;
        writeln!(self.output, "ID\tTitle\t\tStatus")?;
        writeln!(self.output, "-----------------------------")?;
        for book in self.catalogue.list() {
            writeln!(
                self.output,
                "{}\t{} - [{}]",
                book.id,
                book.short_title(),
                book.status()
            )?;
        }
        Ok(())
    }

    fn issue_book(&mut self) -> io::Result<Flow> {
        self.display_books()?;
        let Some(raw_id) = self.prompt("\nEnter Book ID to Issue: ")? else {
            return Ok(Flow::Quit);
        };

        let checked = raw_id
            .parse::<BookId>()
            .and_then(|id| self.catalogue.check_issuable(id).map(|_| id));
        let id = match checked {
            Ok(id) => id,
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(name) = self.prompt("Enter Your Name: ")? else {
            return Ok(Flow::Quit);
        };

        let now = self.clock.now();
        match self.catalogue.issue(id, &name, now) {
            Ok(_) => writeln!(self.output, "Book issued successfully!")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn add_book(&mut self) -> io::Result<Flow> {
        let Some(title) = self.prompt("\nEnter Book Title: ")? else {
            return Ok(Flow::Quit);
        };

        match self.catalogue.add_book(&title) {
            Ok(book) => writeln!(self.output, "Book '{}' added successfully!", book.title)?,
            Err(e) => {
                tracing::warn!(kind = e.kind(), "Add book failed: {}", e);
                writeln!(self.output, "{}", e)?
            }
        }
        Ok(Flow::Continue)
    }

    fn return_book(&mut self) -> io::Result<Flow> {
        let Some(raw_id) = self.prompt("\nEnter Book ID to Return: ")? else {
            return Ok(Flow::Quit);
        };

        let returned = raw_id
            .parse::<BookId>()
            .and_then(|id| self.catalogue.return_book(id).map(|_| ()));
        match returned {
            Ok(()) => writeln!(self.output, "Book returned successfully!")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    /// Print `message` and read one trimmed line, `None` at end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
