//! Bundled default dataset used when a collection has no stored snapshot.
//!
//! Every collection is listed newest-first with unique ids, matching what
//! the store itself would produce.

use crate::domain::{
    Announcement, AnnouncementPriority, Category, CommunityEvent, Feedback, FeedbackStatus, Issue,
    IssueStatus, TimelineEntry,
};

pub fn default_issues() -> Vec<Issue> {
    vec![
        Issue {
            id: 4,
            title: "Burst pipe flooding Mokoena Street".into(),
            category: Category::Water,
            location: "Mokoena Street, Block B".into(),
            description: "Water has been gushing from the main line since early morning.".into(),
            image_url: None,
            status: IssueStatus::Acknowledged,
            progress: IssueStatus::Acknowledged.progress(),
            timeline: vec![
                TimelineEntry::new("07:40", "Reported"),
                TimelineEntry::new("08:15", "Acknowledged"),
            ],
            is_urgent: true,
            reported_by: "Citizen Report".into(),
            reported_at: "2026-10-14T07:40:00Z".into(),
        },
        Issue {
            id: 3,
            title: "Illegal dumping behind the clinic".into(),
            category: Category::Waste,
            location: "Ext 5 Community Clinic".into(),
            description: "Household rubbish piling up along the back fence.".into(),
            image_url: None,
            status: IssueStatus::Reported,
            progress: IssueStatus::Reported.progress(),
            timeline: vec![TimelineEntry::new("16:02", "Reported")],
            is_urgent: false,
            reported_by: "Citizen Report".into(),
            reported_at: "2026-10-12T16:02:00Z".into(),
        },
        Issue {
            id: 2,
            title: "Substation outage in Ward 12".into(),
            category: Category::Electricity,
            location: "Ward 12 substation".into(),
            description: "Whole ward without power after last night's storm.".into(),
            image_url: None,
            status: IssueStatus::InProgress,
            progress: IssueStatus::InProgress.progress(),
            timeline: vec![
                TimelineEntry::new("21:30", "Reported"),
                TimelineEntry::new("22:05", "Acknowledged"),
                TimelineEntry::new("06:45", "In Progress"),
            ],
            is_urgent: true,
            reported_by: "Citizen Report".into(),
            reported_at: "2026-10-10T21:30:00Z".into(),
        },
        Issue {
            id: 1,
            title: "Pothole on Main Road".into(),
            category: Category::Roads,
            location: "Main Road near the taxi rank".into(),
            description: "Large pothole damaging car tyres.".into(),
            image_url: None,
            status: IssueStatus::Resolved,
            progress: IssueStatus::Resolved.progress(),
            timeline: vec![
                TimelineEntry::new("10:12", "Reported"),
                TimelineEntry::new("11:00", "Acknowledged"),
                TimelineEntry::new("09:30", "In Progress"),
                TimelineEntry::new("15:20", "Resolved"),
            ],
            is_urgent: false,
            reported_by: "Citizen Report".into(),
            reported_at: "2026-10-01T10:12:00Z".into(),
        },
    ]
}

pub fn default_events() -> Vec<CommunityEvent> {
    vec![
        CommunityEvent {
            id: 2,
            title: "Ward 12 community meeting".into(),
            date: "2026-11-05".into(),
            time: "18:00".into(),
            location: "Ward 12 community hall".into(),
            description: "Councillor update on electricity repairs and budget.".into(),
            category: "Meeting".into(),
        },
        CommunityEvent {
            id: 1,
            title: "Neighbourhood clean-up day".into(),
            date: "2026-10-25".into(),
            time: "08:00".into(),
            location: "Ext 5 sports field".into(),
            description: "Bags and gloves provided. Bring water.".into(),
            category: "Clean-up".into(),
        },
    ]
}

pub fn default_feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            id: 2,
            name: "Lerato M.".into(),
            subject: "Refuse collection schedule".into(),
            message: "Collection skipped our street two weeks in a row.".into(),
            rating: Some(2),
            status: FeedbackStatus::New,
            submitted_at: "2026-10-13T12:10:00Z".into(),
        },
        Feedback {
            id: 1,
            name: "Sipho K.".into(),
            subject: "Quick pothole repair".into(),
            message: "Main Road was fixed within days. Thank you.".into(),
            rating: Some(5),
            status: FeedbackStatus::Resolved,
            submitted_at: "2026-10-06T09:00:00Z".into(),
        },
    ]
}

pub fn default_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 2,
            title: "Planned water interruption".into(),
            content: "Water supply to Blocks A-C will be off on 20 October from 09:00 to 15:00 for maintenance.".into(),
            priority: AnnouncementPriority::High,
            author: "Water & Sanitation".into(),
            published_at: "2026-10-15".into(),
        },
        Announcement {
            id: 1,
            title: "New issue reporting service".into(),
            content: "Residents can now report service issues online and track progress.".into(),
            priority: AnnouncementPriority::Normal,
            author: "Municipal Office".into(),
            published_at: "2026-10-01".into(),
        },
    ]
}
