use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, StdinLock, StdoutLock, Write};

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use thiserror::Error;

use super::app::{run_session, App};

/// Failures talking to the console. `Closed` is the normal way a piped or
/// redirected session ends and is treated like choosing exit.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console input closed")]
    Closed,
    #[error("console I/O failed")]
    Io(#[from] io::Error),
}

/// Severity of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Line-oriented console over any reader/writer pair. The binary wires it to
/// stdin/stdout; tests feed it scripted input and capture the output buffer.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    /// Enable ANSI colouring of status lines.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line of output.
    pub fn line(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Print a status line, green for info and red for errors when colour is on.
    pub fn status(&mut self, text: &str, kind: StatusKind) -> Result<(), ConsoleError> {
        if !self.color {
            return self.line(text);
        }
        match kind {
            StatusKind::Info => self.line(text.green()),
            StatusKind::Error => self.line(text.red()),
        }
    }

    /// Show `label`, then read one line with its line ending stripped.
    pub fn prompt(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Err(ConsoleError::Closed);
        }
        let trimmed = buffer.trim_end_matches(['\r', '\n']).len();
        buffer.truncate(trimmed);
        Ok(buffer)
    }
}

/// Console bound to the process's standard streams. Colour is only used when
/// stdout is an interactive terminal.
pub fn stdio_console() -> Console<StdinLock<'static>, StdoutLock<'static>> {
    let color = io::stdout().is_terminal();
    Console::new(io::stdin().lock(), io::stdout().lock()).with_color(color)
}

/// Run the startup load and the menu loop against stdin/stdout until the user
/// exits or input runs out.
pub fn run_app(app: &mut App) -> Result<()> {
    let mut console = stdio_console();
    run_session(app, &mut console).context("console session failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_strips_line_endings_only() {
        let mut console = Console::new(Cursor::new("  a b \r\n"), Vec::new());
        assert_eq!(console.prompt("> ").unwrap(), "  a b ");
        assert_eq!(console.into_output(), b"> ");
    }

    #[test]
    fn prompt_reports_closed_input() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert!(matches!(console.prompt("> "), Err(ConsoleError::Closed)));
    }

    #[test]
    fn plain_status_has_no_escape_codes() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.status("saved", StatusKind::Info).unwrap();
        assert_eq!(console.into_output(), b"saved\n");
    }

    #[test]
    fn coloured_status_keeps_text() {
        let mut console = Console::new(Cursor::new(""), Vec::new()).with_color(true);
        console.status("boom", StatusKind::Error).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("boom"));
    }
}
