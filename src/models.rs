//! Domain models held in memory for the length of a session. These types stay
//! light-weight data holders: uniqueness rules live in `inventory`, disk
//! access lives in `db`, and rendering lives in `ui`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One CD in the catalog. The `id` is assigned by the user rather than
/// generated, so two records can only collide when the user types the same
/// number twice.
pub struct CdRecord {
    /// User-assigned identifier used by the delete flow.
    pub id: i64,
    /// Album title as typed at the prompt (whitespace trimmed).
    pub title: String,
    /// Artist name as typed at the prompt (whitespace trimmed).
    pub artist: String,
}

impl CdRecord {
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl fmt::Display for CdRecord {
    /// Render the inventory row, `ID<TAB>Title (by:Artist)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{} (by:{})", self.id, self.title, self.artist)
    }
}

/// Ordered collection of records owned by the running session. Insertion
/// order is the only ordering; lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    records: Vec<CdRecord>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[CdRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CdRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record carrying `id`, if any.
    pub fn get(&self, id: i64) -> Option<&CdRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Swap in a freshly loaded snapshot.
    pub fn replace(&mut self, records: Vec<CdRecord>) {
        self.records = records;
    }

    pub(crate) fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    pub(crate) fn push(&mut self, record: CdRecord) {
        self.records.push(record);
    }

    pub(crate) fn remove(&mut self, index: usize) -> CdRecord {
        self.records.remove(index)
    }
}

impl From<Vec<CdRecord>> for Inventory {
    fn from(records: Vec<CdRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a CdRecord;
    type IntoIter = std::slice::Iter<'a, CdRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
