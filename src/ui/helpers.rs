use std::error::Error;

use crate::models::Inventory;

/// Opening line of the inventory listing.
pub(crate) const INVENTORY_BANNER: &str = "======= The Current Inventory: =======";
/// Column header printed under the banner.
pub(crate) const INVENTORY_HEADER: &str = "ID\tCD Title (by: Artist)";

/// Build the full inventory listing: banner, header, a blank spacer, one row
/// per record in insertion order, and a closing rule of matching width.
pub(crate) fn inventory_lines(inventory: &Inventory) -> Vec<String> {
    let mut lines = Vec::with_capacity(inventory.len() + 4);
    lines.push(INVENTORY_BANNER.to_string());
    lines.push(INVENTORY_HEADER.to_string());
    lines.push(String::new());
    lines.extend(inventory.iter().map(ToString::to_string));
    lines.push("=".repeat(INVENTORY_BANNER.len()));
    lines
}

/// Flatten an error and its sources into one readable line.
pub(crate) fn surface_error(err: &(dyn Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CdRecord;
    use std::io;

    #[test]
    fn listing_frames_rows() {
        let inventory = Inventory::from(vec![
            CdRecord::new(1, "Abbey Road", "The Beatles"),
            CdRecord::new(7, "OK Computer", "Radiohead"),
        ]);

        let lines = inventory_lines(&inventory);

        assert_eq!(lines[0], INVENTORY_BANNER);
        assert_eq!(lines[1], "ID\tCD Title (by: Artist)");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "1\tAbbey Road (by:The Beatles)");
        assert_eq!(lines[4], "7\tOK Computer (by:Radiohead)");
        assert_eq!(lines[5], "=".repeat(INVENTORY_BANNER.len()));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn empty_listing_still_has_frame() {
        assert_eq!(inventory_lines(&Inventory::new()).len(), 4);
    }

    #[test]
    fn surface_error_includes_sources() {
        let err = crate::db::SnapshotError::Io {
            path: "inv.dat".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(surface_error(&err), "could not access inv.dat: denied");
    }
}
