//! Totals and per-subject progress.

use serde::{Deserialize, Serialize};

use crate::model::{StudySession, Subject};

/// Whole-history totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressOverview {
    pub total_study_secs: u64,
    pub session_count: usize,
    /// 0 when there are no sessions.
    pub average_session_secs: u64,
}

/// Per-subject statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectProgress {
    pub subject_id: String,
    pub name: String,
    pub color: String,
    pub total_secs: u64,
    pub session_count: usize,
    pub average_secs: u64,
    /// `(studied hours / target hours) * 100`. Unbounded above 100; the
    /// display layer clamps. 0 when the subject has no target.
    pub progress_pct: f64,
}

pub fn overview(sessions: &[StudySession]) -> ProgressOverview {
    let total_study_secs: u64 = sessions.iter().map(|s| s.duration_secs).sum();
    let session_count = sessions.len();
    let average_session_secs = if session_count == 0 {
        0
    } else {
        total_study_secs / session_count as u64
    };
    ProgressOverview {
        total_study_secs,
        session_count,
        average_session_secs,
    }
}

pub fn subject_progress(subjects: &[Subject], sessions: &[StudySession]) -> Vec<SubjectProgress> {
    subjects
        .iter()
        .map(|subject| {
            let mut total_secs = 0u64;
            let mut session_count = 0usize;
            for session in sessions.iter().filter(|s| s.subject_id == subject.id) {
                total_secs += session.duration_secs;
                session_count += 1;
            }
            let average_secs = if session_count == 0 {
                0
            } else {
                total_secs / session_count as u64
            };
            let progress_pct = if subject.target_hours > 0.0 {
                (total_secs as f64 / 3600.0) / subject.target_hours * 100.0
            } else {
                0.0
            };
            SubjectProgress {
                subject_id: subject.id.clone(),
                name: subject.name.clone(),
                color: subject.color.clone(),
                total_secs,
                session_count,
                average_secs,
                progress_pct,
            }
        })
        .collect()
}

/// The subject with the most recorded time, if any has time at all.
pub fn most_studied(progress: &[SubjectProgress]) -> Option<&SubjectProgress> {
    progress
        .iter()
        .filter(|p| p.total_secs > 0)
        .max_by_key(|p| p.total_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;
    use crate::model::Mood;
    use chrono::Utc;

    fn session(subject_id: &str, duration_secs: u64) -> StudySession {
        StudySession {
            id: format!("s-{subject_id}-{duration_secs}"),
            subject_id: subject_id.into(),
            subject_name: subject_id.into(),
            duration_secs,
            completed_at: Utc::now(),
            mood: Mood::Good,
            note: None,
            points_earned: 0,
        }
    }

    #[test]
    fn overview_of_empty_history_is_zero() {
        let stats = overview(&[]);
        assert_eq!(stats.total_study_secs, 0);
        assert_eq!(stats.average_session_secs, 0);
    }

    #[test]
    fn overview_totals_and_average() {
        let sessions = vec![session("1", 3600), session("1", 1800), session("2", 900)];
        let stats = overview(&sessions);
        assert_eq!(stats.total_study_secs, 6300);
        assert_eq!(stats.session_count, 3);
        assert_eq!(stats.average_session_secs, 2100);
    }

    #[test]
    fn total_is_order_independent() {
        let mut sessions = vec![session("1", 3600), session("2", 900), session("1", 1800)];
        let forward = overview(&sessions).total_study_secs;
        sessions.reverse();
        assert_eq!(overview(&sessions).total_study_secs, forward);
    }

    #[test]
    fn subject_progress_filters_by_subject() {
        let subjects = seed::subjects();
        let sessions = vec![session("1", 3600), session("1", 3600), session("2", 1800)];
        let progress = subject_progress(&subjects, &sessions);

        let math = progress.iter().find(|p| p.subject_id == "1").unwrap();
        assert_eq!(math.total_secs, 7200);
        assert_eq!(math.session_count, 2);
        assert_eq!(math.average_secs, 3600);
        // 2h of a 20h target.
        assert!((math.progress_pct - 10.0).abs() < 1e-9);

        let biology = progress.iter().find(|p| p.subject_id == "4").unwrap();
        assert_eq!(biology.session_count, 0);
        assert_eq!(biology.progress_pct, 0.0);
    }

    #[test]
    fn progress_pct_is_unbounded_above_100() {
        let mut subjects = seed::subjects();
        subjects[0].target_hours = 1.0;
        let sessions = vec![session("1", 2 * 3600)];
        let progress = subject_progress(&subjects, &sessions);
        assert!((progress[0].progress_pct - 200.0).abs() < 1e-9);
    }

    #[test]
    fn most_studied_ignores_untouched_subjects() {
        let subjects = seed::subjects();
        assert!(most_studied(&subject_progress(&subjects, &[])).is_none());

        let sessions = vec![session("2", 3600), session("1", 1800)];
        let progress = subject_progress(&subjects, &sessions);
        assert_eq!(most_studied(&progress).unwrap().subject_id, "2");
    }
}
