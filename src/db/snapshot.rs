use std::fs;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{CdRecord, Inventory};

/// Everything that can go wrong moving a snapshot between disk and memory.
/// None of these end the session; the menu reports them and moves on.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("File not found! ({})", .path.display())]
    NotFound { path: PathBuf },
    #[error("File was empty. Nothing was loaded! ({})", .path.display())]
    Empty { path: PathBuf },
    #[error("{} does not hold a readable inventory: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },
    #[error("could not access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode inventory")]
    Encode(#[from] rmp_serde::encode::Error),
}

/// Clear `inventory`, then fill it from the snapshot at `path`. On any error
/// the inventory is left empty. Returns the number of records loaded.
pub fn load_inventory(inventory: &mut Inventory, path: &Path) -> Result<usize, SnapshotError> {
    inventory.clear();

    match read_snapshot(path) {
        Ok(records) => {
            let count = records.len();
            inventory.replace(records);
            info!(count, path = %path.display(), "loaded inventory");
            Ok(count)
        }
        Err(err) => {
            warn!(error = %err, "inventory load failed");
            Err(err)
        }
    }
}

/// Write the whole inventory to `path`, replacing whatever was there.
pub fn save_inventory(inventory: &Inventory, path: &Path) -> Result<(), SnapshotError> {
    write_snapshot(inventory.records(), path).inspect_err(|err| {
        warn!(error = %err, "inventory save failed");
    })?;
    info!(count = inventory.len(), path = %path.display(), "saved inventory");
    Ok(())
}

/// Decode exactly one snapshot from `path`. Trailing bytes after the record
/// sequence are treated as corruption.
pub fn read_snapshot(path: &Path) -> Result<Vec<CdRecord>, SnapshotError> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SnapshotError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SnapshotError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if bytes.is_empty() {
        return Err(SnapshotError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut cursor = Cursor::new(bytes.as_slice());
    let records: Vec<CdRecord> =
        rmp_serde::from_read(&mut cursor).map_err(|err| classify_decode_error(path, err))?;

    let consumed = cursor.position() as usize;
    if consumed != bytes.len() {
        return Err(SnapshotError::Corrupt {
            path: path.to_path_buf(),
            reason: format!("{} unexpected trailing bytes", bytes.len() - consumed),
        });
    }

    Ok(records)
}

/// Encode `records` and swap the result into place through a temp file in the
/// same directory, so a failed write never truncates the previous snapshot.
pub fn write_snapshot(records: &[CdRecord], path: &Path) -> Result<(), SnapshotError> {
    let io_err = |source: io::Error| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(io_err)?;

    let encoded = rmp_serde::to_vec_named(records)?;

    let mut temp = NamedTempFile::new_in(&dir).map_err(io_err)?;
    temp.write_all(&encoded).map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;
    temp.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}

/// A snapshot cut short reads like an empty file; anything else that fails to
/// decode is not an inventory at all.
fn classify_decode_error(path: &Path, err: rmp_serde::decode::Error) -> SnapshotError {
    use rmp_serde::decode::Error as DecodeError;

    match &err {
        DecodeError::InvalidMarkerRead(source) | DecodeError::InvalidDataRead(source)
            if source.kind() == io::ErrorKind::UnexpectedEof =>
        {
            SnapshotError::Empty {
                path: path.to_path_buf(),
            }
        }
        _ => SnapshotError::Corrupt {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    }
}
