//! Shared state store for a civic issue tracker.
//!
//! Holds issues, community events, feedback and announcements, mirrors each
//! collection to a named storage slot, and classifies new issues as urgent.

mod collection;
pub mod domain;
mod error;
mod record;
pub mod seed;
pub mod snapshot;
mod storage;
mod store;

pub use collection::Collection;
pub use domain::{
    Announcement, AnnouncementPriority, Category, CommunityEvent, Feedback, FeedbackStatus,
    Issue, IssuePatch, IssueStatus, NewAnnouncement, NewCommunityEvent, NewFeedback, NewIssue,
    TimelineEntry, is_urgent,
};
pub use error::{StorageError, TransitionError};
pub use record::{Record, next_id};
pub use storage::{FileStorage, MemoryStorage, SlotStorage};
pub use store::{AppStore, AppStoreBuilder, DEFAULT_KEY_PREFIX, StoreChange};
