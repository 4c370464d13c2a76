//! Session recording and reward-point derivation.
//!
//! A [`SessionDraft`] is a raw stopped/completed study interval. Recording
//! it is one atomic state update: the immutable [`StudySession`] is
//! appended, the matching today's-plan entries flip to completed, the
//! profile's experience/points/level advance, and the subject's completed
//! hours grow by exactly the session duration. Sessions are never mutated
//! or deleted afterwards; a correction would be a new session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Mood, PlannedSession, StudySession, UserProfile};

/// Experience required per level.
const XP_PER_LEVEL: u64 = 1000;

/// A raw study interval waiting to be recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDraft {
    pub subject_id: String,
    pub subject_name: String,
    pub duration_secs: u64,
    pub ended_at: DateTime<Utc>,
    pub mood: Mood,
    #[serde(default)]
    pub note: Option<String>,
}

/// One point per full studied minute, before the mood multiplier.
pub fn base_points(duration_secs: u64) -> u64 {
    duration_secs / 60
}

/// `floor(base_points * multiplier)`, computed in integer tenths so the
/// result is exact for every input.
pub fn points_earned(duration_secs: u64, mood: Mood) -> u64 {
    base_points(duration_secs) * mood.multiplier_tenths() / 10
}

/// Build the immutable session record for a draft.
pub fn build_session(draft: &SessionDraft) -> StudySession {
    StudySession {
        id: Uuid::new_v4().to_string(),
        subject_id: draft.subject_id.clone(),
        subject_name: draft.subject_name.clone(),
        duration_secs: draft.duration_secs,
        completed_at: draft.ended_at,
        mood: draft.mood,
        note: draft.note.clone(),
        points_earned: points_earned(draft.duration_secs, draft.mood),
    }
}

/// Record a draft: append the session and apply every side effect in one
/// pass over the owned state. Returns the created session.
pub fn apply(
    profile: &mut UserProfile,
    sessions: &mut Vec<StudySession>,
    todays_plan: &mut [PlannedSession],
    draft: &SessionDraft,
) -> StudySession {
    let session = build_session(draft);

    for planned in todays_plan.iter_mut() {
        if planned.subject_id == session.subject_id {
            planned.completed = true;
        }
    }

    profile.experience += session.points_earned;
    profile.total_points += session.points_earned;
    profile.level = (profile.experience / XP_PER_LEVEL + 1) as u32;
    if let Some(subject) = profile.subject_mut(&session.subject_id) {
        subject.completed_hours += session.duration_secs as f64 / 3600.0;
    }

    sessions.push(session.clone());
    session
}
