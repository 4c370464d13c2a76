//! Explicit application state.
//!
//! One value owns everything the app persists: profile, session history,
//! resources, mood entries and today's plan. There are no ambient
//! singletons; each logical key has exactly one writer (the store methods
//! replace whole values).

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::model::{
    seed, Mood, MoodEntry, PlannedSession, Resource, ResourceKind, StudySession, UserProfile,
};
use crate::recorder::{self, SessionDraft};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    pub profile: UserProfile,
    pub sessions: Vec<StudySession>,
    pub resources: Vec<Resource>,
    pub mood_entries: Vec<MoodEntry>,
    pub todays_plan: Vec<PlannedSession>,
}

impl AppState {
    /// Fresh state for a newly onboarded profile, with seeded lists.
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            sessions: seed::sessions(),
            resources: seed::resources(),
            mood_entries: seed::mood_entries(),
            todays_plan: seed::todays_plan(),
        }
    }

    /// Record a stopped/completed study interval: one atomic update across
    /// sessions, plan, profile counters and subject hours.
    pub fn record_session(&mut self, draft: &SessionDraft) -> StudySession {
        recorder::apply(
            &mut self.profile,
            &mut self.sessions,
            &mut self.todays_plan,
            draft,
        )
    }

    /// Append a mood check-in entry.
    pub fn log_mood(
        &mut self,
        mood: Mood,
        energy: u8,
        motivation: u8,
        note: Option<String>,
    ) -> Result<&MoodEntry, ValidationError> {
        for (field, value) in [("energy", energy), ("motivation", motivation)] {
            if !(1..=5).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: field.into(),
                    value: i64::from(value),
                    min: 1,
                    max: 5,
                });
            }
        }
        self.mood_entries.push(MoodEntry {
            id: Uuid::new_v4().to_string(),
            mood,
            energy,
            motivation,
            note,
            timestamp: Utc::now(),
        });
        Ok(self.mood_entries.last().expect("just pushed"))
    }

    // ── Resources ────────────────────────────────────────────────────

    pub fn add_resource(
        &mut self,
        title: String,
        kind: ResourceKind,
        subject_id: String,
        url: Option<String>,
        content: Option<String>,
        tags: Vec<String>,
    ) -> &Resource {
        self.resources.push(Resource {
            id: Uuid::new_v4().to_string(),
            title,
            kind,
            url,
            content,
            tags,
            subject_id,
            created_at: Utc::now(),
            last_accessed: None,
            favorite: false,
        });
        self.resources.last().expect("just pushed")
    }

    pub fn remove_resource(&mut self, id: &str) -> bool {
        let before = self.resources.len();
        self.resources.retain(|r| r.id != id);
        self.resources.len() != before
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let resource = self.resources.iter_mut().find(|r| r.id == id)?;
        resource.favorite = !resource.favorite;
        Some(resource.favorite)
    }

    /// Mark a resource as accessed now.
    pub fn touch_resource(&mut self, id: &str) -> Option<&Resource> {
        let resource = self.resources.iter_mut().find(|r| r.id == id)?;
        resource.last_accessed = Some(Utc::now());
        Some(resource)
    }

    /// Client-side resource filtering.
    pub fn filter_resources(
        &self,
        subject_id: Option<&str>,
        kind: Option<ResourceKind>,
        favorites_only: bool,
    ) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| subject_id.map_or(true, |id| r.subject_id == id))
            .filter(|r| kind.map_or(true, |k| r.kind == k))
            .filter(|r| !favorites_only || r.favorite)
            .collect()
    }

    // ── Today's plan ─────────────────────────────────────────────────

    pub fn add_planned_session(
        &mut self,
        subject_id: String,
        subject_name: String,
        start_time: String,
        end_time: String,
        duration_min: u32,
        color: String,
    ) -> &PlannedSession {
        self.todays_plan.push(PlannedSession {
            id: Uuid::new_v4().to_string(),
            subject_id,
            subject_name,
            start_time,
            end_time,
            duration_min,
            completed: false,
            color,
        });
        self.todays_plan.last().expect("just pushed")
    }

    pub fn clear_plan(&mut self) {
        self.todays_plan.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::model::Subject;

    fn state() -> AppState {
        let profile = UserProfile {
            id: "u1".into(),
            name: "Alex".into(),
            email: "alex@example.com".into(),
            goals: vec![],
            subjects: vec![Subject {
                id: "1".into(),
                name: "Mathematics".into(),
                color: "#3B82F6".into(),
                priority: Priority::High,
                target_hours: 20.0,
                completed_hours: 0.0,
            }],
            preferred_study_times: vec![],
            session_length_min: 60,
            created_at: Utc::now(),
            settings: Default::default(),
            level: 1,
            experience: 0,
            total_points: 0,
        };
        AppState::new(profile)
    }

    #[test]
    fn new_state_is_seeded() {
        let state = state();
        assert!(!state.sessions.is_empty());
        assert!(!state.resources.is_empty());
        assert!(!state.todays_plan.is_empty());
    }

    #[test]
    fn log_mood_validates_scales() {
        let mut state = state();
        assert!(state.log_mood(Mood::Good, 0, 3, None).is_err());
        assert!(state.log_mood(Mood::Good, 3, 6, None).is_err());
        let before = state.mood_entries.len();
        state.log_mood(Mood::Good, 4, 4, Some("ready".into())).unwrap();
        assert_eq!(state.mood_entries.len(), before + 1);
    }

    #[test]
    fn resource_crud_round_trip() {
        let mut state = state();
        let id = state
            .add_resource(
                "Problem set".into(),
                ResourceKind::File,
                "1".into(),
                None,
                None,
                vec!["practice".into()],
            )
            .id
            .clone();

        assert_eq!(state.toggle_favorite(&id), Some(true));
        assert!(state.touch_resource(&id).unwrap().last_accessed.is_some());
        let favorites = state.filter_resources(None, None, true);
        assert!(favorites.iter().any(|r| r.id == id));
        assert!(state.remove_resource(&id));
        assert!(!state.remove_resource(&id));
    }

    #[test]
    fn filter_resources_by_subject_and_kind() {
        let state = state();
        let links = state.filter_resources(None, Some(ResourceKind::Link), false);
        assert!(links.iter().all(|r| r.kind == ResourceKind::Link));
        let math = state.filter_resources(Some("1"), None, false);
        assert!(math.iter().all(|r| r.subject_id == "1"));
    }

    #[test]
    fn record_session_flows_through_recorder() {
        let mut state = state();
        let draft = SessionDraft {
            subject_id: "1".into(),
            subject_name: "Mathematics".into(),
            duration_secs: 3600,
            ended_at: Utc::now(),
            mood: Mood::Good,
            note: None,
        };
        let before = state.sessions.len();
        let session = state.record_session(&draft);
        assert_eq!(state.sessions.len(), before + 1);
        assert_eq!(session.points_earned, 72);
        assert_eq!(state.profile.total_points, 72);
    }
}
