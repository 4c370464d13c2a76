//! First-run seed values for each persisted key.
//!
//! Absent keys are never an error: the store hands out these seeds instead.
//! The profile is the one exception -- its absence routes to onboarding.

use chrono::{Duration, Utc};

use super::{
    Mood, MoodEntry, PlannedSession, Priority, Resource, ResourceKind, StudySession, Subject,
};
use crate::recorder;

/// Color palette cycled through newly created subjects.
pub const SUBJECT_COLORS: [&str; 6] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899",
];

pub fn subjects() -> Vec<Subject> {
    vec![
        Subject {
            id: "1".into(),
            name: "Mathematics".into(),
            color: "#3B82F6".into(),
            priority: Priority::High,
            target_hours: 20.0,
            completed_hours: 12.0,
        },
        Subject {
            id: "2".into(),
            name: "Physics".into(),
            color: "#10B981".into(),
            priority: Priority::High,
            target_hours: 15.0,
            completed_hours: 8.0,
        },
        Subject {
            id: "3".into(),
            name: "Chemistry".into(),
            color: "#F59E0B".into(),
            priority: Priority::Medium,
            target_hours: 12.0,
            completed_hours: 6.0,
        },
        Subject {
            id: "4".into(),
            name: "Biology".into(),
            color: "#EF4444".into(),
            priority: Priority::Medium,
            target_hours: 10.0,
            completed_hours: 4.0,
        },
    ]
}

pub fn sessions() -> Vec<StudySession> {
    let now = Utc::now();
    vec![
        StudySession {
            id: "seed-1".into(),
            subject_id: "1".into(),
            subject_name: "Mathematics".into(),
            duration_secs: 3600,
            completed_at: now - Duration::days(1),
            mood: Mood::Good,
            note: Some("Completed calculus problems".into()),
            points_earned: recorder::points_earned(3600, Mood::Good),
        },
        StudySession {
            id: "seed-2".into(),
            subject_id: "2".into(),
            subject_name: "Physics".into(),
            duration_secs: 2700,
            completed_at: now - Duration::days(2),
            mood: Mood::Excellent,
            note: Some("Great progress on mechanics".into()),
            points_earned: recorder::points_earned(2700, Mood::Excellent),
        },
    ]
}

pub fn todays_plan() -> Vec<PlannedSession> {
    vec![
        PlannedSession {
            id: "1".into(),
            subject_id: "1".into(),
            subject_name: "Mathematics".into(),
            start_time: "09:00".into(),
            end_time: "10:30".into(),
            duration_min: 90,
            completed: true,
            color: "#3B82F6".into(),
        },
        PlannedSession {
            id: "2".into(),
            subject_id: "2".into(),
            subject_name: "Physics".into(),
            start_time: "11:00".into(),
            end_time: "12:00".into(),
            duration_min: 60,
            completed: false,
            color: "#10B981".into(),
        },
        PlannedSession {
            id: "3".into(),
            subject_id: "3".into(),
            subject_name: "Chemistry".into(),
            start_time: "14:00".into(),
            end_time: "15:30".into(),
            duration_min: 90,
            completed: false,
            color: "#F59E0B".into(),
        },
    ]
}

pub fn resources() -> Vec<Resource> {
    let now = Utc::now();
    vec![
        Resource {
            id: "1".into(),
            title: "Khan Academy - Calculus".into(),
            kind: ResourceKind::Link,
            url: Some("https://www.khanacademy.org/math/calculus-1".into()),
            content: None,
            tags: vec!["calculus".into(), "video".into(), "free".into()],
            subject_id: "1".into(),
            created_at: now - Duration::days(1),
            last_accessed: Some(now - Duration::hours(1)),
            favorite: true,
        },
        Resource {
            id: "2".into(),
            title: "Physics Formula Sheet".into(),
            kind: ResourceKind::Note,
            url: None,
            content: Some("F = ma\nE = mc^2\nv = u + at".into()),
            tags: vec!["formulas".into(), "reference".into()],
            subject_id: "2".into(),
            created_at: now - Duration::days(2),
            last_accessed: None,
            favorite: false,
        },
        Resource {
            id: "3".into(),
            title: "Organic Chemistry Textbook".into(),
            kind: ResourceKind::Book,
            url: None,
            content: None,
            tags: vec!["textbook".into(), "organic".into(), "chemistry".into()],
            subject_id: "3".into(),
            created_at: now - Duration::days(3),
            last_accessed: None,
            favorite: true,
        },
    ]
}

pub fn mood_entries() -> Vec<MoodEntry> {
    let now = Utc::now();
    vec![
        MoodEntry {
            id: "1".into(),
            mood: Mood::Good,
            energy: 4,
            motivation: 4,
            note: Some("Feeling productive today".into()),
            timestamp: now,
        },
        MoodEntry {
            id: "2".into(),
            mood: Mood::Excellent,
            energy: 5,
            motivation: 5,
            note: Some("Great morning workout, ready to study!".into()),
            timestamp: now - Duration::days(1),
        },
    ]
}
