//! Whole-collection snapshots persisted to storage slots.
//!
//! Each collection is stored as a JSON array under `<prefix>-<slot>`
//! (e.g. `setshaba-issues`). Every save replaces the previous array.

use crate::error::StorageError;
use crate::record::Record;
use crate::storage::SlotStorage;

/// Compute the storage key for a record type.
///
/// # Returns
///
/// `<prefix>-<R::SLOT>`
pub fn slot_key<R: Record>(prefix: &str) -> String {
    format!("{prefix}-{}", R::SLOT)
}

/// Serialize `records` and write them to `key`, replacing any prior value.
///
/// # Errors
///
/// Returns [`StorageError`] if encoding fails or the backend rejects the
/// write.
pub fn save_collection<R: Record>(
    storage: &dyn SlotStorage,
    key: &str,
    records: &[R],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(records)?;
    storage.write(key, &json)
}

/// Load a collection snapshot from `key`.
///
/// # Returns
///
/// - `Ok(Some(records))` if the slot exists and parses, in stored order.
/// - `Ok(None)` if the slot is empty or holds anything that is not a valid
///   array of `R`. Parse failures are logged via `tracing::warn!`.
///
/// # Errors
///
/// Returns [`StorageError`] only when the backend itself fails to read.
pub fn load_collection<R: Record>(
    storage: &dyn SlotStorage,
    key: &str,
) -> Result<Option<Vec<R>>, StorageError> {
    let Some(content) = storage.read(key)? else {
        return Ok(None);
    };

    match serde_json::from_str::<Vec<R>>(&content) {
        Ok(records) => Ok(Some(records)),
        Err(e) => {
            tracing::warn!(
                slot = %key,
                error = %e,
                "failed to parse collection snapshot; treating as absent"
            );
            Ok(None)
        }
    }
}
