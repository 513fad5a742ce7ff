//! Add and delete operations over the in-memory inventory. Both walk the
//! whole collection; the catalog is small enough that an index would only add
//! bookkeeping.

use thiserror::Error;
use tracing::debug;

use crate::models::{CdRecord, Inventory};

/// Logical failures of a single add/delete request. Neither is fatal: the
/// offending request is rejected and the session carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("ID {0} already in use")]
    DuplicateId(i64),
    #[error("Could not find a CD with ID {0}!")]
    NotFound(i64),
}

/// Append a CD unless another record already uses `id`. On a duplicate the
/// inventory is left untouched.
pub fn add_cd(
    inventory: &mut Inventory,
    id: i64,
    title: &str,
    artist: &str,
) -> Result<(), InventoryError> {
    if inventory.iter().any(|record| record.id == id) {
        debug!(id, "rejected duplicate id");
        return Err(InventoryError::DuplicateId(id));
    }

    inventory.push(CdRecord::new(id, title, artist));
    debug!(id, total = inventory.len(), "added cd");
    Ok(())
}

/// Remove the first record carrying `id` and hand it back so the caller can
/// report what went away.
pub fn delete_cd(inventory: &mut Inventory, id: i64) -> Result<CdRecord, InventoryError> {
    let index = inventory
        .position(id)
        .ok_or(InventoryError::NotFound(id))?;
    let removed = inventory.remove(index);
    debug!(id, total = inventory.len(), "deleted cd");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(inventory: &Inventory) -> Vec<&str> {
        inventory.iter().map(|record| record.title.as_str()).collect()
    }

    #[test]
    fn distinct_ids_are_all_kept_and_retrievable() {
        let mut inventory = Inventory::new();
        for id in 1..=5 {
            add_cd(&mut inventory, id, &format!("Album {id}"), "Artist").unwrap();
        }
        assert_eq!(inventory.len(), 5);
        for id in 1..=5 {
            assert_eq!(inventory.get(id).unwrap().title, format!("Album {id}"));
        }
    }

    #[test]
    fn duplicate_id_leaves_inventory_unchanged() {
        let mut inventory = Inventory::new();
        add_cd(&mut inventory, 1, "Abbey Road", "The Beatles").unwrap();
        let before = inventory.clone();

        let err = add_cd(&mut inventory, 1, "Dup", "X").unwrap_err();

        assert_eq!(err, InventoryError::DuplicateId(1));
        assert_eq!(err.to_string(), "ID 1 already in use");
        assert_eq!(inventory, before);
    }

    #[test]
    fn delete_removes_only_the_matching_record() {
        let mut inventory = Inventory::new();
        add_cd(&mut inventory, 1, "One", "a").unwrap();
        add_cd(&mut inventory, 2, "Two", "b").unwrap();
        add_cd(&mut inventory, 3, "Three", "c").unwrap();

        let removed = delete_cd(&mut inventory, 2).unwrap();

        assert_eq!(removed, CdRecord::new(2, "Two", "b"));
        assert_eq!(titles(&inventory), vec!["One", "Three"]);
    }

    #[test]
    fn delete_missing_id_reports_not_found() {
        let mut inventory = Inventory::new();
        add_cd(&mut inventory, 4, "Four", "d").unwrap();

        assert_eq!(
            delete_cd(&mut inventory, 5),
            Err(InventoryError::NotFound(5))
        );
        assert_eq!(titles(&inventory), vec!["Four"]);
    }

    #[test]
    fn delete_only_takes_first_match() {
        // The store does not enforce uniqueness on its own, so a loaded
        // snapshot may still carry repeated ids.
        let mut inventory = Inventory::from(vec![
            CdRecord::new(7, "First", "x"),
            CdRecord::new(7, "Second", "y"),
        ]);

        delete_cd(&mut inventory, 7).unwrap();

        assert_eq!(titles(&inventory), vec!["Second"]);
    }

    #[test]
    fn abbey_road_scenario() {
        let mut inventory = Inventory::new();
        add_cd(&mut inventory, 1, "Abbey Road", "The Beatles").unwrap();
        assert!(add_cd(&mut inventory, 1, "Dup", "X").is_err());
        assert_eq!(
            inventory.records(),
            &[CdRecord::new(1, "Abbey Road", "The Beatles")]
        );

        delete_cd(&mut inventory, 1).unwrap();
        assert!(inventory.is_empty());

        assert_eq!(
            delete_cd(&mut inventory, 1),
            Err(InventoryError::NotFound(1))
        );
        assert!(inventory.is_empty());
    }
}
