use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::db::{load_inventory, save_inventory};
use crate::inventory::{add_cd, delete_cd};
use crate::models::Inventory;

use super::forms::{confirms_reload, confirms_save, prompt_id, CdForm};
use super::helpers::{inventory_lines, surface_error};
use super::terminal::{Console, ConsoleError, StatusKind};

/// Menu text shown before every choice.
const MENU_LINES: &[&str] = &[
    "Menu",
    "",
    "[l] load Inventory from file",
    "[a] Add CD",
    "[i] Display Current Inventory",
    "[d] delete CD from Inventory",
    "[s] Save Inventory to file",
    "[x] exit",
    "",
];
const CHOICE_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]: ";

/// Commands reachable from the menu, one per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Load,
    Add,
    Inventory,
    Delete,
    Save,
    Exit,
}

impl Command {
    /// Map a typed menu choice to a command. Input is trimmed and matched
    /// case-insensitively; anything else is rejected.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "l" => Some(Command::Load),
            "a" => Some(Command::Add),
            "i" => Some(Command::Inventory),
            "d" => Some(Command::Delete),
            "s" => Some(Command::Save),
            "x" => Some(Command::Exit),
            _ => None,
        }
    }

    fn mode(self) -> Mode {
        match self {
            Command::Load => Mode::LoadConfirm,
            Command::Add => Mode::AddPrompt,
            Command::Inventory => Mode::ShowInventory,
            Command::Delete => Mode::DeletePrompt,
            Command::Save => Mode::SaveConfirm,
            Command::Exit => Mode::Exit,
        }
    }
}

/// Where the session currently is. Every non-menu mode runs once and hands
/// control back to `Menu`; `Exit` ends the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Menu,
    LoadConfirm,
    AddPrompt,
    ShowInventory,
    DeletePrompt,
    SaveConfirm,
    Exit,
}

/// Session state: the in-memory inventory and the file it is loaded from and
/// saved to.
pub struct App {
    inventory: Inventory,
    path: PathBuf,
}

impl App {
    pub fn new(inventory: Inventory, path: PathBuf) -> Self {
        Self { inventory, path }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the inventory from disk, reporting failures as status lines.
    /// A failed load always leaves the inventory empty.
    pub fn reload<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), ConsoleError> {
        if let Err(err) = load_inventory(&mut self.inventory, &self.path) {
            console.blank()?;
            console.status(&surface_error(&err), StatusKind::Error)?;
            console.blank()?;
        }
        Ok(())
    }

    /// Drive the menu until the user exits. Closed input ends the session the
    /// same way `x` does; nothing is saved implicitly.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), ConsoleError> {
        let mut mode = Mode::Menu;

        while mode != Mode::Exit {
            let step = match mode {
                Mode::Menu => self.handle_menu(console),
                Mode::LoadConfirm => self.handle_load(console),
                Mode::AddPrompt => self.handle_add(console),
                Mode::ShowInventory => self.show_inventory(console).map(|_| Mode::Menu),
                Mode::DeletePrompt => self.handle_delete(console),
                Mode::SaveConfirm => self.handle_save(console),
                Mode::Exit => Ok(Mode::Exit),
            };

            mode = match step {
                Ok(next) => next,
                Err(ConsoleError::Closed) => {
                    debug!("console input closed, leaving menu");
                    Mode::Exit
                }
                Err(err) => return Err(err),
            };
        }

        Ok(())
    }

    fn handle_menu<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Mode, ConsoleError> {
        for line in MENU_LINES {
            console.line(line)?;
        }

        let command = loop {
            if let Some(command) = Command::from_input(&console.prompt(CHOICE_PROMPT)?) {
                break command;
            }
        };
        console.blank()?;
        debug!(?command, "menu choice");
        Ok(command.mode())
    }

    fn handle_load<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Mode, ConsoleError> {
        console.line(
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.",
        )?;
        let answer = console
            .prompt("Type 'yes' to continue and reload from file, otherwise reload will be canceled: ")?;

        if confirms_reload(&answer) {
            console.line("reloading...")?;
            self.reload(console)?;
        } else {
            console.prompt(
                "canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.",
            )?;
        }
        self.show_inventory(console)?;
        Ok(Mode::Menu)
    }

    fn handle_add<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Mode, ConsoleError> {
        let form = CdForm::prompt(console)?;

        if let Err(err) = add_cd(&mut self.inventory, form.id, &form.title, &form.artist) {
            console.blank()?;
            console.status(&format!("------- {err} -------"), StatusKind::Error)?;
            console.blank()?;
        }
        self.show_inventory(console)?;
        Ok(Mode::Menu)
    }

    fn handle_delete<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Mode, ConsoleError> {
        self.show_inventory(console)?;
        let id = prompt_id(console, "Which ID would you like to delete? ")?;

        match delete_cd(&mut self.inventory, id) {
            Ok(_) => console.status("The CD was removed", StatusKind::Info)?,
            Err(err) => console.status(&err.to_string(), StatusKind::Error)?,
        }
        self.show_inventory(console)?;
        Ok(Mode::Menu)
    }

    fn handle_save<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Mode, ConsoleError> {
        self.show_inventory(console)?;
        let answer = console.prompt("Save this inventory to file? [y/n] ")?;

        if confirms_save(&answer) {
            match save_inventory(&self.inventory, &self.path) {
                Ok(()) => console.status(
                    &format!("Inventory saved to {}", self.path.display()),
                    StatusKind::Info,
                )?,
                Err(err) => console.status(&surface_error(&err), StatusKind::Error)?,
            }
        } else {
            console.prompt(
                "The inventory was NOT saved to file. Press [ENTER] to return to the menu.",
            )?;
        }
        Ok(Mode::Menu)
    }

    fn show_inventory<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<(), ConsoleError> {
        for line in inventory_lines(&self.inventory) {
            console.line(line)?;
        }
        Ok(())
    }
}

/// Full session: the unconditional startup load, then the menu loop.
pub fn run_session<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
) -> Result<(), ConsoleError> {
    match app.reload(console) {
        Ok(()) => {}
        Err(ConsoleError::Closed) => return Ok(()),
        Err(err) => return Err(err),
    }
    app.run(console)
}
