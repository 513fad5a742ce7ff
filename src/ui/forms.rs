use std::io::{BufRead, Write};

use thiserror::Error;

use super::terminal::{Console, ConsoleError, StatusKind};

/// Rejection for an ID that is not a whole number.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("This is not a number. Please enter a valid number")]
pub struct ParseIdError;

/// Parse a CD id typed at a prompt. Surrounding whitespace is ignored.
pub(crate) fn parse_id(input: &str) -> Result<i64, ParseIdError> {
    input.trim().parse().map_err(|_| ParseIdError)
}

/// Keep asking until the user types an integer.
pub(crate) fn prompt_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> Result<i64, ConsoleError> {
    loop {
        let input = console.prompt(label)?;
        match parse_id(&input) {
            Ok(id) => return Ok(id),
            Err(err) => console.status(&err.to_string(), StatusKind::Error)?,
        }
    }
}

/// The reload prompt needs the full word, in any case.
pub(crate) fn confirms_reload(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}

pub(crate) fn confirms_save(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Values collected by the add-CD prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CdForm {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) artist: String,
}

impl CdForm {
    /// Ask for ID, title and artist in that order. Text fields are only
    /// trimmed; blanks are accepted.
    pub(crate) fn prompt<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
    ) -> Result<Self, ConsoleError> {
        let id = prompt_id(console, "Enter an ID: ")?;
        let title = console.prompt("Enter the CD's Title: ")?.trim().to_string();
        let artist = console
            .prompt("Enter the Artist's Name: ")?
            .trim()
            .to_string();
        Ok(Self { id, title, artist })
    }
}
