//! Crate-level error types for slot storage and issue status transitions.

use crate::domain::IssueStatus;

/// Error returned when reading or writing a storage slot fails.
///
/// The store itself never surfaces this to callers: read failures fall back
/// to the default dataset and write failures are logged and dropped. It is
/// returned directly by [`SlotStorage`](crate::SlotStorage) implementations
/// and by the [`snapshot`](crate::snapshot) helpers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Disk I/O failure.
    ///
    /// An underlying filesystem error occurred while reading or replacing
    /// a slot file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend refused the operation (quota exceeded, disabled, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Error returned by [`AppStore::transition_issue`](crate::AppStore::transition_issue)
/// when the requested status change is not a forward move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The issue cannot move from `from` to `to`.
    #[error("illegal status transition: {from} -> {to}")]
    Illegal { from: IssueStatus, to: IssueStatus },
}
