//! Profile export.
//!
//! A user-triggered, read-only JSON dump of the whole profile with an
//! export timestamp and a format version string. There is no import path.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::UserProfile;

pub const EXPORT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileExport {
    pub user: UserProfile,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

pub fn export_profile(profile: &UserProfile) -> ProfileExport {
    ProfileExport {
        user: profile.clone(),
        export_date: Utc::now(),
        version: EXPORT_VERSION.into(),
    }
}

/// Pretty-printed JSON document for download/saving.
pub fn export_json(profile: &UserProfile) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&export_profile(profile))
}

/// `studyflow-data-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("studyflow-data-{date}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::{OnboardingWizard, SubjectDraft};

    fn profile() -> UserProfile {
        let mut wizard = OnboardingWizard::new();
        wizard.name = "Alex".into();
        wizard.email = "alex@example.com".into();
        wizard.goals = vec!["Pass finals".into()];
        wizard.subjects = vec![SubjectDraft::new("Mathematics", 0)];
        wizard.preferred_study_times = vec!["08:00-10:00".into()];
        wizard.finish().unwrap()
    }

    #[test]
    fn export_carries_version_and_timestamp() {
        let json = export_json(&profile()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], "1.0");
        assert!(value["export_date"].is_string());
        assert_eq!(value["user"]["name"], "Alex");
    }

    #[test]
    fn file_name_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(export_file_name(date), "studyflow-data-2026-08-07.json");
    }
}
