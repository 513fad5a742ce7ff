//! Core library surface for the CD inventory manager.
//!
//! The binary only wires these pieces together; tests and other tooling can
//! drive the same menu loop over in-memory buffers.
pub mod db;
pub mod inventory;
pub mod models;
pub mod ui;

/// Persistence entry points used at startup and by the load/save commands.
pub use db::{inventory_path, load_inventory, save_inventory, SnapshotError};

/// Add/delete rules over the in-memory collection.
pub use inventory::{add_cd, delete_cd, InventoryError};

pub use models::{CdRecord, Inventory};

/// The interactive session entry points and state container.
pub use ui::{run_app, run_session, App, Console, ConsoleError};
