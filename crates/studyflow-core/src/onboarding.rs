//! Guided onboarding flow for new users.
//!
//! Five steps collect identity, goals, subjects, schedule and preferences.
//! `advance()` validates the current step and refuses to move forward until
//! it passes -- there is no partial save. `finish()` produces the initial
//! [`UserProfile`].

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::model::seed::SUBJECT_COLORS;
use crate::model::{Priority, Subject, UserProfile, UserSettings};

/// Preferred-time slots offered during onboarding.
pub const TIME_SLOTS: [&str; 8] = [
    "06:00-08:00",
    "08:00-10:00",
    "10:00-12:00",
    "12:00-14:00",
    "14:00-16:00",
    "16:00-18:00",
    "18:00-20:00",
    "20:00-22:00",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingStep {
    PersonalInfo,
    Goals,
    Subjects,
    Schedule,
    Preferences,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 5] = [
        OnboardingStep::PersonalInfo,
        OnboardingStep::Goals,
        OnboardingStep::Subjects,
        OnboardingStep::Schedule,
        OnboardingStep::Preferences,
    ];

    pub fn title(self) -> &'static str {
        match self {
            OnboardingStep::PersonalInfo => "Personal Info",
            OnboardingStep::Goals => "Study Goals",
            OnboardingStep::Subjects => "Subjects",
            OnboardingStep::Schedule => "Schedule",
            OnboardingStep::Preferences => "Preferences",
        }
    }
}

/// A subject as entered during onboarding, before ids are assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectDraft {
    pub name: String,
    pub color: String,
    pub priority: Priority,
    pub target_hours: f64,
}

impl SubjectDraft {
    /// A draft with the defaults the form would pre-fill, cycling the
    /// shared color palette by position.
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            color: SUBJECT_COLORS[position % SUBJECT_COLORS.len()].into(),
            priority: Priority::Medium,
            target_hours: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingWizard {
    step_index: usize,
    pub name: String,
    pub email: String,
    pub goals: Vec<String>,
    pub subjects: Vec<SubjectDraft>,
    pub preferred_study_times: Vec<String>,
    pub session_length_min: u32,
    pub settings: UserSettings,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self {
            step_index: 0,
            name: String::new(),
            email: String::new(),
            goals: Vec::new(),
            subjects: Vec::new(),
            preferred_study_times: Vec::new(),
            session_length_min: 60,
            settings: UserSettings::default(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        OnboardingStep::ALL[self.step_index]
    }

    pub fn is_last_step(&self) -> bool {
        self.step_index == OnboardingStep::ALL.len() - 1
    }

    /// Validate the current step without moving.
    pub fn validate_step(&self) -> Result<(), ValidationError> {
        match self.step() {
            OnboardingStep::PersonalInfo => {
                if self.name.trim().is_empty() {
                    return Err(ValidationError::InvalidValue {
                        field: "name".into(),
                        message: "name is required".into(),
                    });
                }
                if self.email.trim().is_empty() {
                    return Err(ValidationError::InvalidValue {
                        field: "email".into(),
                        message: "email is required".into(),
                    });
                }
                Ok(())
            }
            OnboardingStep::Goals => {
                if self.goals.iter().any(|g| !g.trim().is_empty()) {
                    Ok(())
                } else {
                    Err(ValidationError::EmptyCollection("goals".into()))
                }
            }
            OnboardingStep::Subjects => {
                if self.subjects.is_empty() {
                    return Err(ValidationError::EmptyCollection("subjects".into()));
                }
                if self.subjects.iter().any(|s| s.name.trim().is_empty()) {
                    return Err(ValidationError::InvalidValue {
                        field: "subjects".into(),
                        message: "every subject needs a name".into(),
                    });
                }
                Ok(())
            }
            OnboardingStep::Schedule => {
                if self.preferred_study_times.is_empty() {
                    Err(ValidationError::EmptyCollection(
                        "preferred_study_times".into(),
                    ))
                } else {
                    Ok(())
                }
            }
            OnboardingStep::Preferences => Ok(()),
        }
    }

    /// Move to the next step; blocked while the current step is invalid.
    pub fn advance(&mut self) -> Result<OnboardingStep, ValidationError> {
        self.validate_step()?;
        if !self.is_last_step() {
            self.step_index += 1;
        }
        Ok(self.step())
    }

    pub fn back(&mut self) {
        self.step_index = self.step_index.saturating_sub(1);
    }

    /// Validate everything and build the initial profile.
    pub fn finish(mut self) -> Result<UserProfile, ValidationError> {
        self.step_index = 0;
        for _ in 0..OnboardingStep::ALL.len() {
            self.validate_step()?;
            if !self.is_last_step() {
                self.step_index += 1;
            }
        }

        let subjects = self
            .subjects
            .iter()
            .enumerate()
            .map(|(index, draft)| Subject {
                id: (index + 1).to_string(),
                name: draft.name.trim().to_string(),
                color: draft.color.clone(),
                priority: draft.priority,
                target_hours: draft.target_hours,
                completed_hours: 0.0,
            })
            .collect();

        Ok(UserProfile {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            goals: self
                .goals
                .into_iter()
                .filter(|g| !g.trim().is_empty())
                .collect(),
            subjects,
            preferred_study_times: self.preferred_study_times,
            session_length_min: self.session_length_min,
            created_at: Utc::now(),
            settings: self.settings,
            level: 1,
            experience: 0,
            total_points: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> OnboardingWizard {
        let mut wizard = OnboardingWizard::new();
        wizard.name = "Alex".into();
        wizard.email = "alex@example.com".into();
        wizard.goals = vec!["Pass finals".into(), "".into()];
        wizard.subjects = vec![SubjectDraft::new("Mathematics", 0)];
        wizard.preferred_study_times = vec!["08:00-10:00".into()];
        wizard
    }

    #[test]
    fn advance_blocks_on_missing_name() {
        let mut wizard = OnboardingWizard::new();
        wizard.email = "alex@example.com".into();
        assert!(wizard.advance().is_err());
        assert_eq!(wizard.step(), OnboardingStep::PersonalInfo);
    }

    #[test]
    fn advance_walks_every_step() {
        let mut wizard = filled_wizard();
        assert_eq!(wizard.advance().unwrap(), OnboardingStep::Goals);
        assert_eq!(wizard.advance().unwrap(), OnboardingStep::Subjects);
        assert_eq!(wizard.advance().unwrap(), OnboardingStep::Schedule);
        assert_eq!(wizard.advance().unwrap(), OnboardingStep::Preferences);
        assert!(wizard.is_last_step());
    }

    #[test]
    fn goals_require_one_non_blank_entry() {
        let mut wizard = filled_wizard();
        wizard.goals = vec!["   ".into()];
        wizard.advance().unwrap(); // personal info passes
        assert!(wizard.advance().is_err());
    }

    #[test]
    fn subjects_require_names() {
        let mut wizard = filled_wizard();
        wizard.subjects[0].name = "".into();
        assert!(wizard.finish().is_err());
    }

    #[test]
    fn finish_builds_a_fresh_profile() {
        let profile = filled_wizard().finish().unwrap();
        assert_eq!(profile.level, 1);
        assert_eq!(profile.experience, 0);
        assert_eq!(profile.total_points, 0);
        assert_eq!(profile.goals, vec!["Pass finals".to_string()]); // blanks dropped
        assert_eq!(profile.subjects.len(), 1);
        assert_eq!(profile.subjects[0].id, "1");
        assert_eq!(profile.subjects[0].completed_hours, 0.0);
    }

    #[test]
    fn subject_colors_cycle() {
        assert_eq!(SubjectDraft::new("A", 0).color, SUBJECT_COLORS[0]);
        assert_eq!(
            SubjectDraft::new("B", SUBJECT_COLORS.len()).color,
            SUBJECT_COLORS[0]
        );
    }
}
