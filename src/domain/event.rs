//! Community events -- meetings, clean-ups and other public gatherings.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A scheduled community event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityEvent {
    pub id: u64,
    pub title: String,
    /// ISO 8601 date (e.g. `"2026-11-02"`).
    pub date: String,
    /// Display time (e.g. `"10:00"`).
    pub time: String,
    pub location: String,
    pub description: String,
    /// Free-form grouping label ("Meeting", "Clean-up", ...).
    pub category: String,
}

/// Fields supplied when scheduling a new event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCommunityEvent {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
}

impl Record for CommunityEvent {
    const SLOT: &'static str = "events";
    type Draft = NewCommunityEvent;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: NewCommunityEvent) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            description: draft.description,
            category: draft.category,
        }
    }
}
