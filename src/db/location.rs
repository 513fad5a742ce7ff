use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".cd-inventory";
/// Snapshot file name stored inside the application data directory.
pub const INVENTORY_FILE_NAME: &str = "CDInventory.dat";
/// Environment variable that replaces the default snapshot path outright.
pub const PATH_ENV_VAR: &str = "CD_INVENTORY_FILE";

/// Resolve where the inventory snapshot lives for this process.
pub fn inventory_path() -> PathBuf {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    resolve_inventory_path(env::var_os(PATH_ENV_VAR), home.as_deref())
}

/// Pick the snapshot path: an explicit override wins, then the data directory
/// under `home`, then a bare file name in the working directory.
pub fn resolve_inventory_path(override_path: Option<OsString>, home: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path.filter(|path| !path.is_empty()) {
        return PathBuf::from(path);
    }

    match home {
        Some(home) => home.join(DATA_DIR_NAME).join(INVENTORY_FILE_NAME),
        None => PathBuf::from(INVENTORY_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_home() {
        let path = resolve_inventory_path(
            Some(OsString::from("/tmp/elsewhere.dat")),
            Some(Path::new("/home/someone")),
        );
        assert_eq!(path, PathBuf::from("/tmp/elsewhere.dat"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let path = resolve_inventory_path(Some(OsString::new()), Some(Path::new("/home/someone")));
        assert_eq!(
            path,
            Path::new("/home/someone")
                .join(".cd-inventory")
                .join("CDInventory.dat")
        );
    }

    #[test]
    fn falls_back_to_working_directory() {
        assert_eq!(
            resolve_inventory_path(None, None),
            PathBuf::from("CDInventory.dat")
        );
    }
}
