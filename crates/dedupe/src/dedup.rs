//! Keep-the-lowest deduplication.
//!
//! Records are grouped by key and each group is reduced to the member with
//! the smallest identifier. Groups come out in the order their key was first
//! seen; [`OutputOrder`] can rearrange them afterwards.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::record::Record;

/// Reduce `items` to one item per key, keeping the lowest-ranked one.
///
/// When two items share both key and rank, the one seen first is kept.
pub fn deduplicate_by<T, K, R, FK, FR>(
    items: impl IntoIterator<Item = T>,
    key_fn: FK,
    rank_fn: FR,
) -> Vec<T>
where
    K: Hash + Eq,
    R: Ord,
    FK: Fn(&T) -> K,
    FR: Fn(&T) -> R,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut kept: Vec<T> = Vec::new();

    for item in items {
        match slots.entry(key_fn(&item)) {
            Entry::Occupied(slot) => {
                let current = &mut kept[*slot.get()];
                if rank_fn(&item) < rank_fn(current) {
                    *current = item;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(kept.len());
                kept.push(item);
            }
        }
    }

    kept
}

/// Keep one record per key: the one with the lowest identifier.
pub fn deduplicate(records: impl IntoIterator<Item = Record>) -> Vec<Record> {
    deduplicate_with_report(records).0
}

/// Like [`deduplicate`], also returning counts describing the reduction.
pub fn deduplicate_with_report(
    records: impl IntoIterator<Item = Record>,
) -> (Vec<Record>, DedupReport) {
    let mut input = 0usize;
    let kept = deduplicate_by(
        records.into_iter().inspect(|_| input += 1),
        |record| record.key().to_owned(),
        Record::identifier,
    );

    let report = DedupReport {
        input,
        kept: kept.len(),
    };
    debug!(
        input = report.input,
        kept = report.kept,
        dropped = report.dropped(),
        "Deduplicated records"
    );
    (kept, report)
}

/// Counts describing one deduplication pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DedupReport {
    /// Number of records read.
    pub input: usize,
    /// Number of records kept, one per distinct key.
    pub kept: usize,
}

impl DedupReport {
    /// Number of records discarded as duplicates.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.input - self.kept
    }
}

impl fmt::Display for DedupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records read, {} kept, {} dropped",
            self.input,
            self.kept,
            self.dropped()
        )
    }
}

impl Serialize for DedupReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DedupReport", 3)?;
        state.serialize_field("input", &self.input)?;
        state.serialize_field("kept", &self.kept)?;
        state.serialize_field("dropped", &self.dropped())?;
        state.end()
    }
}

/// Ordering applied to deduplicated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    /// Order in which each key first appeared in the input.
    #[default]
    FirstSeen,
    /// Ascending by key.
    Key,
    /// Ascending by identifier, then key.
    Identifier,
}

impl OutputOrder {
    /// Reorder `records` in place.
    pub fn apply(self, records: &mut [Record]) {
        match self {
            Self::FirstSeen => {}
            Self::Key => records.sort_by(|a, b| a.key().cmp(b.key())),
            Self::Identifier => {
                records.sort_by(|a, b| {
                    a.identifier()
                        .cmp(&b.identifier())
                        .then_with(|| a.key().cmp(b.key()))
                });
            }
        }
    }
}
