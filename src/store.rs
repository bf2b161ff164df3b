//! Top-level entry point: the shared [`AppStore`] owning every collection.
//!
//! The store is opened via [`AppStoreBuilder`], which picks the slot
//! storage backend, the slot key prefix, and whether empty slots fall back
//! to the bundled dataset. All operations are synchronous and run to
//! completion; each successful mutation rewrites the affected collection's
//! slot and then notifies subscribers.

use std::fmt;

use crate::collection::Collection;
use crate::domain::{
    Announcement, CommunityEvent, Feedback, FeedbackStatus, Issue, IssuePatch, IssueStatus,
    NewAnnouncement, NewCommunityEvent, NewFeedback, NewIssue, TimelineEntry,
};
use crate::error::TransitionError;
use crate::record::Record;
use crate::seed;
use crate::snapshot::{load_collection, save_collection, slot_key};
use crate::storage::{MemoryStorage, SlotStorage};

/// Slot key prefix used unless the builder overrides it.
pub const DEFAULT_KEY_PREFIX: &str = "setshaba";

/// What changed after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreChange {
    Issues,
    Events,
    Feedback,
    Announcements,
    AdminMode,
}

type Listener = Box<dyn FnMut(StoreChange)>;

/// Builder for [`AppStore`].
///
/// # Examples
///
/// ```
/// use setshaba::{AppStore, MemoryStorage};
///
/// let store = AppStore::builder()
///     .storage(MemoryStorage::new())
///     .key_prefix("demo")
///     .open();
///
/// assert!(!store.is_admin());
/// assert!(!store.issues().is_empty());
/// ```
pub struct AppStoreBuilder {
    storage: Option<Box<dyn SlotStorage>>,
    key_prefix: String,
    seed_defaults: bool,
}

impl Default for AppStoreBuilder {
    fn default() -> Self {
        Self {
            storage: None,
            key_prefix: DEFAULT_KEY_PREFIX.to_owned(),
            seed_defaults: true,
        }
    }
}

impl fmt::Debug for AppStoreBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStoreBuilder")
            .field("key_prefix", &self.key_prefix)
            .field("seed_defaults", &self.seed_defaults)
            .finish()
    }
}

impl AppStoreBuilder {
    /// Set the slot storage backend. Defaults to a fresh [`MemoryStorage`].
    pub fn storage(mut self, storage: impl SlotStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Set the slot key prefix. Slots are named `<prefix>-issues`,
    /// `<prefix>-events`, `<prefix>-feedback` and `<prefix>-announcements`.
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Whether empty or unreadable slots fall back to the bundled dataset
    /// (`true`, the default) or to an empty collection.
    pub fn seed_defaults(mut self, seed: bool) -> Self {
        self.seed_defaults = seed;
        self
    }

    /// Load every collection and return the ready store.
    ///
    /// Each collection is restored verbatim from its slot when the slot
    /// holds a valid snapshot; otherwise it starts from the defaults. Load
    /// problems are logged, never returned. Admin mode always starts off.
    pub fn open(self) -> AppStore {
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(MemoryStorage::new()));
        let prefix = self.key_prefix;
        let seeded = self.seed_defaults;

        let issues = restore(&*storage, &prefix, seeded, seed::default_issues);
        let events = restore(&*storage, &prefix, seeded, seed::default_events);
        let feedback = restore(&*storage, &prefix, seeded, seed::default_feedback);
        let announcements = restore(&*storage, &prefix, seeded, seed::default_announcements);

        AppStore {
            storage,
            key_prefix: prefix,
            issues,
            events,
            feedback,
            announcements,
            is_admin: false,
            listeners: Vec::new(),
        }
    }
}

/// The shared state store.
///
/// Sole owner of the issue, event, feedback and announcement collections
/// and of the admin-mode flag. Consumers read snapshots through the
/// accessor methods and change state only through the mutation methods.
pub struct AppStore {
    storage: Box<dyn SlotStorage>,
    key_prefix: String,
    issues: Collection<Issue>,
    events: Collection<CommunityEvent>,
    feedback: Collection<Feedback>,
    announcements: Collection<Announcement>,
    is_admin: bool,
    listeners: Vec<Listener>,
}

// Manual `Debug` because the storage backend and listeners are trait
// objects.
impl fmt::Debug for AppStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppStore")
            .field("key_prefix", &self.key_prefix)
            .field("issues", &self.issues.len())
            .field("events", &self.events.len())
            .field("feedback", &self.feedback.len())
            .field("announcements", &self.announcements.len())
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

impl AppStore {
    pub fn builder() -> AppStoreBuilder {
        AppStoreBuilder::default()
    }

    // -----------------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------------

    /// Issues, newest first.
    pub fn issues(&self) -> &[Issue] {
        self.issues.as_slice()
    }

    /// Community events, newest first.
    pub fn events(&self) -> &[CommunityEvent] {
        self.events.as_slice()
    }

    /// Feedback items, newest first.
    pub fn feedback(&self) -> &[Feedback] {
        self.feedback.as_slice()
    }

    /// Announcements, newest first.
    pub fn announcements(&self) -> &[Announcement] {
        self.announcements.as_slice()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    pub fn issue(&self, id: u64) -> Option<&Issue> {
        self.issues.get(id)
    }

    pub fn feedback_item(&self, id: u64) -> Option<&Feedback> {
        self.feedback.get(id)
    }

    /// Issues flagged urgent at creation, newest first.
    pub fn urgent_issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues.as_slice().iter().filter(|i| i.is_urgent)
    }

    /// Register a callback run after every successful mutation.
    ///
    /// Callbacks run synchronously, in registration order, after the
    /// affected collection has been written to storage. Updates that match
    /// no record do not notify.
    pub fn subscribe(&mut self, listener: impl FnMut(StoreChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Turn admin mode on or off. Held in memory only.
    pub fn set_admin_mode(&mut self, flag: bool) {
        self.is_admin = flag;
        tracing::info!(is_admin = flag, "admin mode set");
        self.notify(StoreChange::AdminMode);
    }

    /// Merge `patch` into the issue with the given id.
    ///
    /// Urgency is not re-derived. Returns `false`, changing nothing and
    /// writing nothing, when no issue has that id.
    pub fn update_issue(&mut self, id: u64, patch: IssuePatch) -> bool {
        if !self.issues.update(id, |issue| issue.apply_patch(patch)) {
            tracing::debug!(id, "update_issue: unknown id ignored");
            return false;
        }
        persist(&*self.storage, &self.key_prefix, self.issues.as_slice());
        self.notify(StoreChange::Issues);
        true
    }

    /// Record a new issue.
    ///
    /// The issue gets the next free id and an urgency flag computed by
    /// [`is_urgent`](crate::is_urgent), and is placed at the front of the
    /// collection.
    ///
    /// Returns `None`, changing and writing nothing, when the collection's
    /// largest id is already `u64::MAX`. The same holds for every `add_*`
    /// operation.
    pub fn add_issue(&mut self, draft: NewIssue) -> Option<Issue> {
        let Some(issue) = self.issues.insert(draft) else {
            refuse_add::<Issue>();
            return None;
        };
        tracing::info!(
            id = issue.id,
            category = %issue.category,
            is_urgent = issue.is_urgent,
            "issue reported"
        );
        persist(&*self.storage, &self.key_prefix, self.issues.as_slice());
        self.notify(StoreChange::Issues);
        Some(issue)
    }

    /// Move an issue forward through its resolution stages.
    ///
    /// Sets the status, sets `progress` to the stage's percentage, and
    /// appends a timeline entry `(at, status label)`.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when the issue moved, `Ok(false)` when no issue has that
    /// id.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Illegal`] when `to` is not after the
    /// issue's current status. The issue is left untouched.
    pub fn transition_issue(
        &mut self,
        id: u64,
        to: IssueStatus,
        at: impl Into<String>,
    ) -> Result<bool, TransitionError> {
        let Some(from) = self.issues.get(id).map(|i| i.status) else {
            tracing::debug!(id, "transition_issue: unknown id ignored");
            return Ok(false);
        };
        if !from.can_transition_to(to) {
            return Err(TransitionError::Illegal { from, to });
        }

        let at = at.into();
        self.issues.update(id, |issue| {
            issue.status = to;
            issue.progress = to.progress();
            issue.timeline.push(TimelineEntry::new(at, to.as_str()));
        });
        tracing::info!(id, from = %from, to = %to, "issue status advanced");
        persist(&*self.storage, &self.key_prefix, self.issues.as_slice());
        self.notify(StoreChange::Issues);
        Ok(true)
    }

    /// Record new feedback with the next free id, at the front.
    pub fn add_feedback(&mut self, draft: NewFeedback) -> Option<Feedback> {
        let Some(item) = self.feedback.insert(draft) else {
            refuse_add::<Feedback>();
            return None;
        };
        tracing::info!(id = item.id, "feedback submitted");
        persist(&*self.storage, &self.key_prefix, self.feedback.as_slice());
        self.notify(StoreChange::Feedback);
        Some(item)
    }

    /// Replace the status of a feedback item.
    ///
    /// Any status may be written. Returns `false`, changing nothing, when no
    /// feedback has that id.
    pub fn update_feedback_status(&mut self, id: u64, status: FeedbackStatus) -> bool {
        if !self.feedback.update(id, |f| f.status = status) {
            tracing::debug!(id, "update_feedback_status: unknown id ignored");
            return false;
        }
        persist(&*self.storage, &self.key_prefix, self.feedback.as_slice());
        self.notify(StoreChange::Feedback);
        true
    }

    /// Record a new community event with the next free id, at the front.
    pub fn add_event(&mut self, draft: NewCommunityEvent) -> Option<CommunityEvent> {
        let Some(event) = self.events.insert(draft) else {
            refuse_add::<CommunityEvent>();
            return None;
        };
        tracing::info!(id = event.id, "event scheduled");
        persist(&*self.storage, &self.key_prefix, self.events.as_slice());
        self.notify(StoreChange::Events);
        Some(event)
    }

    /// Record a new announcement with the next free id, at the front.
    pub fn add_announcement(&mut self, draft: NewAnnouncement) -> Option<Announcement> {
        let Some(announcement) = self.announcements.insert(draft) else {
            refuse_add::<Announcement>();
            return None;
        };
        tracing::info!(id = announcement.id, "announcement published");
        persist(
            &*self.storage,
            &self.key_prefix,
            self.announcements.as_slice(),
        );
        self.notify(StoreChange::Announcements);
        Some(announcement)
    }

    fn notify(&mut self, change: StoreChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}

/// Load one collection, falling back to `defaults` (or nothing, when
/// seeding is off) if the slot is empty, corrupt or unreadable.
fn restore<R: Record>(
    storage: &dyn SlotStorage,
    prefix: &str,
    seeded: bool,
    defaults: fn() -> Vec<R>,
) -> Collection<R> {
    let key = slot_key::<R>(prefix);
    let restored = match load_collection::<R>(storage, &key) {
        Ok(restored) => restored,
        Err(e) => {
            tracing::warn!(slot = %key, error = %e, "failed to read slot; using defaults");
            None
        }
    };

    match restored {
        Some(records) => {
            tracing::debug!(slot = %key, count = records.len(), "collection restored");
            Collection::from_records(records)
        }
        None => {
            let records = if seeded { defaults() } else { Vec::new() };
            tracing::debug!(slot = %key, count = records.len(), "collection seeded");
            Collection::from_records(records)
        }
    }
}

/// Log an add refused because the collection's ids are exhausted.
fn refuse_add<R: Record>() {
    tracing::warn!(
        collection = R::SLOT,
        "largest id is u64::MAX; record not added"
    );
}

/// Write a whole collection to its slot. Failures are logged and dropped;
/// the in-memory state stays authoritative.
fn persist<R: Record>(storage: &dyn SlotStorage, prefix: &str, records: &[R]) {
    let key = slot_key::<R>(prefix);
    match save_collection(storage, &key, records) {
        Ok(()) => tracing::debug!(slot = %key, count = records.len(), "collection persisted"),
        Err(e) => tracing::warn!(
            slot = %key,
            error = %e,
            "failed to persist collection; keeping in-memory state"
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::domain::{AnnouncementPriority, Category};
    use crate::storage::test_fixtures::FailingStorage;

    fn empty_store() -> (AppStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = AppStore::builder()
            .storage(storage.clone())
            .seed_defaults(false)
            .open();
        (store, storage)
    }

    fn report(category: Category, title: &str, description: &str) -> NewIssue {
        NewIssue::reported(
            title,
            category,
            "Main St",
            description,
            "09:00",
            "2026-10-16T09:00:00Z",
        )
    }

    fn feedback_draft(subject: &str) -> NewFeedback {
        NewFeedback {
            name: "Naledi".into(),
            subject: subject.into(),
            message: "Please look into this.".into(),
            rating: None,
            status: FeedbackStatus::New,
            submitted_at: "2026-10-16T10:00:00Z".into(),
        }
    }

    #[test]
    fn open_without_snapshot_uses_seed() {
        let store = AppStore::builder().open();
        assert_eq!(store.issues(), seed::default_issues().as_slice());
        assert_eq!(store.events(), seed::default_events().as_slice());
        assert_eq!(store.feedback(), seed::default_feedback().as_slice());
        assert_eq!(
            store.announcements(),
            seed::default_announcements().as_slice()
        );
        assert!(!store.is_admin());
    }

    #[test]
    fn open_does_not_write_slots() {
        let storage = MemoryStorage::new();
        let _store = AppStore::builder().storage(storage.clone()).open();
        assert!(storage.keys().is_empty());
    }

    #[test]
    fn corrupt_slot_falls_back_to_seed() {
        let storage = MemoryStorage::new();
        storage.insert("setshaba-issues", "{ not json");
        let store = AppStore::builder().storage(storage).open();
        assert_eq!(store.issues(), seed::default_issues().as_slice());
    }

    #[test]
    fn add_issue_assigns_ids_and_prepends() {
        let (mut store, _) = empty_store();

        let x = store.add_issue(report(Category::Roads, "Pothole", "small")).expect("id available");
        let y = store.add_issue(report(Category::Waste, "Bins", "full")).expect("id available");

        assert_eq!(x.id, 1);
        assert_eq!(y.id, 2);
        let ids: Vec<u64> = store.issues().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn add_issue_continues_after_seed() {
        let mut store = AppStore::builder().open();
        let max = store.issues().iter().map(|i| i.id).max().unwrap_or(0);
        let added = store.add_issue(report(Category::Other, "Noise", "")).expect("id available");
        assert_eq!(added.id, max + 1);
        assert_eq!(store.issues()[0].id, added.id);
    }

    #[test]
    fn add_issue_computes_urgency() {
        let (mut store, _) = empty_store();
        let water = store
            .add_issue(report(Category::Water, "Low pressure", ""))
            .expect("id available");
        let pothole = store
            .add_issue(report(Category::Roads, "Pothole on Main St", "small hole"))
            .expect("id available");
        let burst = store
            .add_issue(report(Category::Roads, "Pipe burst near school", ""))
            .expect("id available");

        assert!(water.is_urgent);
        assert!(!pothole.is_urgent);
        assert!(burst.is_urgent);
        assert_eq!(store.urgent_issues().count(), 2);
    }

    #[test]
    fn add_issue_persists_collection() {
        let (mut store, storage) = empty_store();
        store.add_issue(report(Category::Roads, "Pothole", "")).expect("id available");

        let raw = storage.get("setshaba-issues").expect("slot should be written");
        let saved: Vec<Issue> = serde_json::from_str(&raw).expect("slot should parse");
        assert_eq!(saved, store.issues());
    }

    #[test]
    fn update_issue_merges_fields_without_recomputing_urgency() {
        let (mut store, _) = empty_store();
        let issue = store
            .add_issue(report(Category::Roads, "Pothole", "small"))
            .expect("id available");

        let matched = store.update_issue(
            issue.id,
            IssuePatch {
                title: Some("Pipe burst".into()),
                ..IssuePatch::status(IssueStatus::InProgress)
                    .with_progress(50)
                    .with_timeline(vec![TimelineEntry::new("10:00", "Crew dispatched")])
            },
        );

        assert!(matched);
        let updated = store.issue(issue.id).expect("issue exists");
        assert_eq!(updated.title, "Pipe burst");
        assert_eq!(updated.status, IssueStatus::InProgress);
        assert_eq!(updated.progress, 50);
        assert_eq!(
            updated.timeline,
            vec![TimelineEntry::new("10:00", "Crew dispatched")]
        );
        assert_eq!(updated.location, "Main St");
        assert!(!updated.is_urgent);
    }

    #[test]
    fn update_issue_allows_any_status() {
        let (mut store, _) = empty_store();
        let issue = store.add_issue(report(Category::Roads, "Pothole", "")).expect("id available");
        assert!(store.update_issue(issue.id, IssuePatch::status(IssueStatus::Resolved)));
        assert!(store.update_issue(issue.id, IssuePatch::status(IssueStatus::Reported)));
        assert_eq!(
            store.issue(issue.id).map(|i| i.status),
            Some(IssueStatus::Reported)
        );
    }

    #[test]
    fn update_issue_unknown_id_is_noop() {
        let (mut store, storage) = empty_store();
        store.add_issue(report(Category::Roads, "Pothole", "")).expect("id available");
        let before = store.issues().to_vec();
        let slot_before = storage.get("setshaba-issues");

        assert!(!store.update_issue(999, IssuePatch::status(IssueStatus::Resolved)));

        assert_eq!(store.issues(), before.as_slice());
        assert_eq!(storage.get("setshaba-issues"), slot_before);
    }

    #[test]
    fn transition_issue_advances_and_records_timeline() {
        let (mut store, _) = empty_store();
        let issue = store.add_issue(report(Category::Roads, "Pothole", "")).expect("id available");

        let moved = store
            .transition_issue(issue.id, IssueStatus::InProgress, "11:30")
            .expect("forward move is legal");

        assert!(moved);
        let issue = store.issue(issue.id).expect("issue exists");
        assert_eq!(issue.status, IssueStatus::InProgress);
        assert_eq!(issue.progress, 60);
        assert_eq!(
            issue.timeline.last(),
            Some(&TimelineEntry::new("11:30", "In Progress"))
        );
    }

    #[test]
    fn transition_issue_rejects_backward_moves() {
        let (mut store, _) = empty_store();
        let issue = store.add_issue(report(Category::Roads, "Pothole", "")).expect("id available");
        store
            .transition_issue(issue.id, IssueStatus::Resolved, "12:00")
            .expect("forward move is legal");
        let before = store.issues().to_vec();

        let err = store
            .transition_issue(issue.id, IssueStatus::Acknowledged, "13:00")
            .unwrap_err();

        assert_eq!(
            err,
            TransitionError::Illegal {
                from: IssueStatus::Resolved,
                to: IssueStatus::Acknowledged,
            }
        );
        assert_eq!(store.issues(), before.as_slice());
    }

    #[test]
    fn transition_issue_unknown_id_is_ok_false() {
        let (mut store, _) = empty_store();
        let moved = store
            .transition_issue(7, IssueStatus::Resolved, "12:00")
            .expect("unknown id is not an error");
        assert!(!moved);
    }

    #[test]
    fn feedback_add_and_status_update() {
        let (mut store, storage) = empty_store();
        let first = store.add_feedback(feedback_draft("Water")).expect("id available");
        let second = store.add_feedback(feedback_draft("Roads")).expect("id available");
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(store.feedback()[0].id, 2);

        assert!(store.update_feedback_status(first.id, FeedbackStatus::Resolved));
        assert_eq!(
            store.feedback_item(first.id).map(|f| f.status),
            Some(FeedbackStatus::Resolved)
        );

        let raw = storage.get("setshaba-feedback").expect("slot written");
        assert!(raw.contains("\"resolved\""));
    }

    #[test]
    fn feedback_status_unknown_id_is_noop() {
        let (mut store, _) = empty_store();
        store.add_feedback(feedback_draft("Water")).expect("id available");
        let before = store.feedback().to_vec();
        assert!(!store.update_feedback_status(42, FeedbackStatus::InReview));
        assert_eq!(store.feedback(), before.as_slice());
    }

    #[test]
    fn events_and_announcements_get_ids_and_prepend() {
        let (mut store, storage) = empty_store();
        let event = store
            .add_event(NewCommunityEvent {
                title: "Clean-up".into(),
                date: "2026-11-01".into(),
                time: "08:00".into(),
                location: "Park".into(),
                description: "Bring gloves".into(),
                category: "Clean-up".into(),
            })
            .expect("id available");
        let announcement = store
            .add_announcement(NewAnnouncement {
                title: "Road closure".into(),
                content: "Main Road closed Saturday.".into(),
                priority: AnnouncementPriority::High,
                author: "Roads Dept".into(),
                published_at: "2026-10-16".into(),
            })
            .expect("id available");

        assert_eq!(event.id, 1);
        assert_eq!(announcement.id, 1);
        assert_eq!(store.events(), &[event]);
        assert_eq!(store.announcements(), &[announcement]);
        assert_eq!(
            storage.keys(),
            vec!["setshaba-announcements", "setshaba-events"]
        );
    }

    #[test]
    fn key_prefix_names_the_slots() {
        let storage = MemoryStorage::new();
        let mut store = AppStore::builder()
            .storage(storage.clone())
            .key_prefix("ward12")
            .open();
        store.add_feedback(feedback_draft("Lights")).expect("id available");
        assert_eq!(store.key_prefix(), "ward12");
        assert_eq!(storage.keys(), vec!["ward12-feedback"]);
    }

    #[test]
    fn write_failure_does_not_block_mutation() {
        let mut store = AppStore::builder()
            .storage(FailingStorage)
            .seed_defaults(false)
            .open();

        let issue = store.add_issue(report(Category::Waste, "Bins", "")).expect("id available");

        assert_eq!(store.issues(), &[issue]);
    }

    #[test]
    fn add_is_refused_when_restored_ids_are_exhausted() {
        let storage = MemoryStorage::new();
        let exhausted = serde_json::to_string(&[Feedback {
            id: u64::MAX,
            name: "Ayanda".into(),
            subject: "Last".into(),
            message: "Highest possible id.".into(),
            rating: None,
            status: FeedbackStatus::New,
            submitted_at: "2026-10-16T10:00:00Z".into(),
        }])
        .expect("serialize feedback");
        storage.insert("setshaba-feedback", exhausted.clone());

        let mut store = AppStore::builder().storage(storage.clone()).open();
        let notified = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&notified);
        store.subscribe(move |_| *counter.borrow_mut() += 1);
        let before = store.feedback().to_vec();

        assert_eq!(store.add_feedback(feedback_draft("Overflow")), None);

        assert_eq!(store.feedback(), before.as_slice());
        assert_eq!(storage.get("setshaba-feedback"), Some(exhausted));
        assert_eq!(*notified.borrow(), 0);
    }

    #[test]
    fn subscribers_see_each_successful_mutation() {
        let (mut store, _) = empty_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |change| sink.borrow_mut().push(change));

        store.set_admin_mode(true);
        let issue = store.add_issue(report(Category::Roads, "Pothole", "")).expect("id available");
        store.update_issue(issue.id, IssuePatch::status(IssueStatus::Acknowledged));
        store.update_issue(999, IssuePatch::default());
        let fb = store.add_feedback(feedback_draft("Water")).expect("id available");
        store.update_feedback_status(fb.id, FeedbackStatus::InReview);

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreChange::AdminMode,
                StoreChange::Issues,
                StoreChange::Issues,
                StoreChange::Feedback,
                StoreChange::Feedback,
            ]
        );
    }

    #[test]
    fn admin_mode_is_memory_only() {
        let (mut store, storage) = empty_store();
        store.set_admin_mode(true);
        assert!(store.is_admin());
        assert!(storage.keys().is_empty());
    }
}
