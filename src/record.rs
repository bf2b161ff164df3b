//! Record trait and id assignment shared by every collection.

use serde::{Serialize, de::DeserializeOwned};

/// A record stored in one of the store's collections.
///
/// The implementing type is the full, persisted record. New records are
/// built from a [`Draft`](Record::Draft), which carries every field except
/// the id (and anything else the store derives at creation time).
///
/// # Contract
///
/// - [`id`](Record::id) is unique within the record's collection.
/// - [`from_draft`](Record::from_draft) must be a pure function of its
///   inputs: no I/O, no clock reads.
pub trait Record: Clone + Serialize + DeserializeOwned + 'static {
    /// Suffix of the storage slot this collection is persisted under
    /// (e.g. `"issues"` for the `setshaba-issues` slot).
    const SLOT: &'static str;

    /// Caller-supplied fields for a new record.
    type Draft;

    /// The record's numeric identifier.
    fn id(&self) -> u64;

    /// Build the full record from a draft and the id assigned by the store.
    fn from_draft(id: u64, draft: Self::Draft) -> Self;
}

/// Compute the id for the next record in `records`.
///
/// Returns one more than the largest id present, or `1` when `records` is
/// empty. Gaps left by externally edited snapshots are never reused.
/// Returns `None` once the largest id is `u64::MAX`.
pub fn next_id<R: Record>(records: &[R]) -> Option<u64> {
    match records.iter().map(Record::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
