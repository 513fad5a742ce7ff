//! Console front-end: a line-based menu over any reader/writer pair.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::{run_session, App, Command};
pub use forms::ParseIdError;
pub use terminal::{run_app, stdio_console, Console, ConsoleError, StatusKind};
