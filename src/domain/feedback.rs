//! Feedback -- comments and complaints submitted by residents.
//!
//! Feedback moves new -> in-review -> resolved, but the store accepts any
//! status on update.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Review state of a feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackStatus {
    #[default]
    New,
    InReview,
    Resolved,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InReview => "in-review",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feedback submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: u64,
    pub name: String,
    pub subject: String,
    pub message: String,
    /// Optional 1..=5 satisfaction score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub status: FeedbackStatus,
    /// ISO 8601 submission timestamp.
    pub submitted_at: String,
}

/// Fields supplied when submitting feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    pub name: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub status: FeedbackStatus,
    pub submitted_at: String,
}

// ---------------------------------------------------------------------------
// Record impl
// ---------------------------------------------------------------------------

impl Record for Feedback {
    const SLOT: &'static str = "feedback";
    type Draft = NewFeedback;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: NewFeedback) -> Self {
        Self {
            id,
            name: draft.name,
            subject: draft.subject,
            message: draft.message,
            rating: draft.rating,
            status: draft.status,
            submitted_at: draft.submitted_at,
        }
    }
}
