mod announcement;
mod event;
mod feedback;
mod issue;

pub use announcement::{Announcement, AnnouncementPriority, NewAnnouncement};
pub use event::{CommunityEvent, NewCommunityEvent};
pub use feedback::{Feedback, FeedbackStatus, NewFeedback};
pub use issue::{Category, Issue, IssuePatch, IssueStatus, NewIssue, TimelineEntry, is_urgent};
