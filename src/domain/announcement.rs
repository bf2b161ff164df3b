//! Announcements published by the municipality.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// How prominently an announcement is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementPriority {
    Low,
    #[default]
    Normal,
    High,
}

/// A published announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub priority: AnnouncementPriority,
    pub author: String,
    /// ISO 8601 publication date.
    pub published_at: String,
}

/// Fields supplied when publishing an announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub priority: AnnouncementPriority,
    pub author: String,
    pub published_at: String,
}

impl Record for Announcement {
    const SLOT: &'static str = "announcements";
    type Draft = NewAnnouncement;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: NewAnnouncement) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            priority: draft.priority,
            author: draft.author,
            published_at: draft.published_at,
        }
    }
}
