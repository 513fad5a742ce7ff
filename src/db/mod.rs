//! Persistence module split across logical submodules.

pub mod location;
mod snapshot;

pub use location::inventory_path;
pub use snapshot::{load_inventory, read_snapshot, save_inventory, write_snapshot, SnapshotError};
