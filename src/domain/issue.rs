//! Issue records -- citizen reports of service failures.
//!
//! An issue is reported, then worked through by administrators:
//! Reported -> Acknowledged -> In Progress -> Resolved. Urgency is decided
//! once, when the issue is created, by [`is_urgent`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Service area an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Water,
    Electricity,
    Roads,
    Waste,
    Other,
}

impl Category {
    /// Return the display label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Electricity => "Electricity",
            Self::Roads => "Roads",
            Self::Waste => "Waste",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution stages of an issue.
///
/// Stages are ordered. [`AppStore::update_issue`](crate::AppStore::update_issue)
/// may write any stage; [`can_transition_to`](IssueStatus::can_transition_to)
/// is only enforced by
/// [`AppStore::transition_issue`](crate::AppStore::transition_issue).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum IssueStatus {
    #[default]
    Reported,
    Acknowledged,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl IssueStatus {
    /// Return the display label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reported => "Reported",
            Self::Acknowledged => "Acknowledged",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    /// Progress percentage shown for an issue at this stage.
    pub fn progress(&self) -> i64 {
        match self {
            Self::Reported => 0,
            Self::Acknowledged => 25,
            Self::InProgress => 60,
            Self::Resolved => 100,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved)
    }

    /// Whether an issue at `self` may move to `to`.
    ///
    /// Only forward moves are legal; stages may be skipped. Nothing leaves
    /// `Resolved`.
    pub fn can_transition_to(&self, to: IssueStatus) -> bool {
        to > *self
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an issue's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Display timestamp (e.g. `"14:05"`).
    pub time: String,
    /// What happened.
    pub event: String,
}

impl TimelineEntry {
    pub fn new(time: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            event: event.into(),
        }
    }
}

/// A reported issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: u64,
    pub title: String,
    pub category: Category,
    pub location: String,
    pub description: String,
    /// Optional photo reference supplied by the reporter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: IssueStatus,
    /// Percentage complete. The store writes 0..=100 but keeps whatever
    /// integer a snapshot or patch supplies.
    pub progress: i64,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    /// Set once at creation by [`is_urgent`]; never recomputed.
    pub is_urgent: bool,
    pub reported_by: String,
    /// ISO 8601 creation timestamp.
    pub reported_at: String,
}

// ---------------------------------------------------------------------------
// Drafts and patches
// ---------------------------------------------------------------------------

/// Fields supplied when reporting a new issue.
///
/// Urgency is not part of the draft; the store derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub title: String,
    pub category: Category,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub status: IssueStatus,
    pub progress: i64,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    pub reported_by: String,
    pub reported_at: String,
}

impl NewIssue {
    /// Draft of a fresh citizen report: status `Reported`, no progress, and
    /// a single `Reported` timeline entry stamped with `time`.
    ///
    /// # Arguments
    ///
    /// * `time` - Display timestamp for the first timeline entry.
    /// * `reported_at` - ISO 8601 creation timestamp.
    pub fn reported(
        title: impl Into<String>,
        category: Category,
        location: impl Into<String>,
        description: impl Into<String>,
        time: impl Into<String>,
        reported_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            location: location.into(),
            description: description.into(),
            image_url: None,
            status: IssueStatus::Reported,
            progress: IssueStatus::Reported.progress(),
            timeline: vec![TimelineEntry::new(time, IssueStatus::Reported.as_str())],
            reported_by: "Citizen Report".to_owned(),
            reported_at: reported_at.into(),
        }
    }

    /// Attach a photo reference.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// A partial update to an [`Issue`]. `None` fields are left unchanged.
///
/// There is no id field: updates cannot renumber a record.
/// Editing `title`, `category` or `description` does not re-run
/// [`is_urgent`]; set `is_urgent` explicitly if it should change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePatch {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// `Some(None)` clears the image.
    pub image_url: Option<Option<String>>,
    pub status: Option<IssueStatus>,
    pub progress: Option<i64>,
    pub timeline: Option<Vec<TimelineEntry>>,
    pub is_urgent: Option<bool>,
    pub reported_by: Option<String>,
    pub reported_at: Option<String>,
}

impl IssuePatch {
    /// Patch that only changes the status.
    pub fn status(status: IssueStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn with_progress(mut self, progress: i64) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_timeline(mut self, timeline: Vec<TimelineEntry>) -> Self {
        self.timeline = Some(timeline);
        self
    }
}

impl Issue {
    /// Merge `patch` into this issue, field by field.
    pub fn apply_patch(&mut self, patch: IssuePatch) {
        let IssuePatch {
            title,
            category,
            location,
            description,
            image_url,
            status,
            progress,
            timeline,
            is_urgent,
            reported_by,
            reported_at,
        } = patch;

        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = image_url {
            self.image_url = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = progress {
            self.progress = v;
        }
        if let Some(v) = timeline {
            self.timeline = v;
        }
        if let Some(v) = is_urgent {
            self.is_urgent = v;
        }
        if let Some(v) = reported_by {
            self.reported_by = v;
        }
        if let Some(v) = reported_at {
            self.reported_at = v;
        }
    }
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

const URGENT_TITLE_KEYWORDS: [&str; 4] = ["burst", "leak", "outage", "emergency"];
const URGENT_DESCRIPTION_KEYWORDS: [&str; 2] = ["urgent", "emergency"];

/// Decide whether a new issue is urgent.
///
/// Water and electricity issues are always urgent. Otherwise the title is
/// searched for "burst", "leak", "outage" or "emergency" and the description
/// for "urgent" or "emergency", ignoring case.
pub fn is_urgent(category: Category, title: &str, description: &str) -> bool {
    if matches!(category, Category::Water | Category::Electricity) {
        return true;
    }
    let title = title.to_lowercase();
    let description = description.to_lowercase();
    URGENT_TITLE_KEYWORDS.iter().any(|k| title.contains(k))
        || URGENT_DESCRIPTION_KEYWORDS
            .iter()
            .any(|k| description.contains(k))
}

// ---------------------------------------------------------------------------
// Record impl
// ---------------------------------------------------------------------------

impl Record for Issue {
    const SLOT: &'static str = "issues";
    type Draft = NewIssue;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: NewIssue) -> Self {
        let is_urgent = is_urgent(draft.category, &draft.title, &draft.description);
        Self {
            id,
            title: draft.title,
            category: draft.category,
            location: draft.location,
            description: draft.description,
            image_url: draft.image_url,
            status: draft.status,
            progress: draft.progress,
            timeline: draft.timeline,
            is_urgent,
            reported_by: draft.reported_by,
            reported_at: draft.reported_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
