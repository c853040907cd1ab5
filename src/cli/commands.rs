//! Menu commands understood by the interactive session

use std::str::FromStr;

/// One entry of the library menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Display,
    Issue,
    Add,
    Return,
    Quit,
}

impl Command {
    /// Menu entries in display order
    pub const ALL: [Command; 5] = [
        Command::Display,
        Command::Issue,
        Command::Add,
        Command::Return,
        Command::Quit,
    ];

    /// Key letter typed at the menu
    pub fn key(self) -> char {
        match self {
            Command::Display => 'D',
            Command::Issue => 'I',
            Command::Add => 'A',
            Command::Return => 'R',
            Command::Quit => 'Q',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Display => "Display Books",
            Command::Issue => "Issue Book",
            Command::Add => "Add Book",
            Command::Return => "Return Book",
            Command::Quit => "Quit",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Command::Display => "display",
            Command::Issue => "issue",
            Command::Add => "add",
            Command::Return => "return",
            Command::Quit => "quit",
        }
    }
}

/// Input that matches no menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Accepts the key letter or the full verb, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        Command::ALL
            .into_iter()
            .find(|cmd| {
                choice.eq_ignore_ascii_case(cmd.verb())
                    || (choice.chars().count() == 1
                        && choice
                            .chars()
                            .next()
                            .is_some_and(|c| c.to_ascii_uppercase() == cmd.key()))
            })
            .ok_or_else(|| UnknownCommand(choice.to_string()))
    }
}
