//! Study streaks derived from the session history.
//!
//! A studied day is any calendar date with at least one recorded session.
//! The current streak counts consecutive studied days ending at `today`,
//! or at yesterday when today has no session yet -- an unbroken streak
//! should not read as zero before the first session of the day.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::StudySession;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
    pub last_study_date: Option<NaiveDate>,
}

pub fn streaks(sessions: &[StudySession], today: NaiveDate) -> StreakSummary {
    let days: BTreeSet<NaiveDate> = sessions.iter().map(|s| s.completed_at.date_naive()).collect();
    if days.is_empty() {
        return StreakSummary::default();
    }

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &day in &days {
        run = match prev {
            Some(p) if day - p == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    let mut current = 0u32;
    let mut cursor = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };
    while days.contains(&cursor) {
        current += 1;
        cursor = cursor - Duration::days(1);
    }

    StreakSummary {
        current,
        longest,
        last_study_date: days.last().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mood;
    use chrono::{TimeZone, Utc};

    fn session_on(date: NaiveDate) -> StudySession {
        let completed_at = Utc
            .with_ymd_and_hms(
                chrono::Datelike::year(&date),
                chrono::Datelike::month(&date),
                chrono::Datelike::day(&date),
                12,
                0,
                0,
            )
            .unwrap();
        StudySession {
            id: date.to_string(),
            subject_id: "1".into(),
            subject_name: "Mathematics".into(),
            duration_secs: 1800,
            completed_at,
            mood: Mood::Good,
            note: None,
            points_earned: 0,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_sessions_no_streak() {
        let summary = streaks(&[], date(2026, 8, 7));
        assert_eq!(summary.current, 0);
        assert_eq!(summary.longest, 0);
        assert!(summary.last_study_date.is_none());
    }

    #[test]
    fn streak_ending_today() {
        let sessions = vec![
            session_on(date(2026, 8, 5)),
            session_on(date(2026, 8, 6)),
            session_on(date(2026, 8, 7)),
        ];
        let summary = streaks(&sessions, date(2026, 8, 7));
        assert_eq!(summary.current, 3);
        assert_eq!(summary.longest, 3);
        assert_eq!(summary.last_study_date, Some(date(2026, 8, 7)));
    }

    #[test]
    fn streak_survives_a_day_without_a_session_yet() {
        let sessions = vec![session_on(date(2026, 8, 5)), session_on(date(2026, 8, 6))];
        let summary = streaks(&sessions, date(2026, 8, 7));
        assert_eq!(summary.current, 2);
    }

    #[test]
    fn gap_of_two_days_breaks_the_streak() {
        let sessions = vec![session_on(date(2026, 8, 4))];
        let summary = streaks(&sessions, date(2026, 8, 7));
        assert_eq!(summary.current, 0);
        assert_eq!(summary.longest, 1);
    }

    #[test]
    fn longest_streak_may_be_in_the_past() {
        let sessions = vec![
            session_on(date(2026, 7, 1)),
            session_on(date(2026, 7, 2)),
            session_on(date(2026, 7, 3)),
            session_on(date(2026, 7, 4)),
            session_on(date(2026, 8, 7)),
        ];
        let summary = streaks(&sessions, date(2026, 8, 7));
        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 4);
    }

    #[test]
    fn multiple_sessions_one_day_count_once() {
        let sessions = vec![
            session_on(date(2026, 8, 7)),
            session_on(date(2026, 8, 7)),
        ];
        let summary = streaks(&sessions, date(2026, 8, 7));
        assert_eq!(summary.current, 1);
        assert_eq!(summary.longest, 1);
    }
}
