//! Per-day-of-week activity buckets.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::StudySession;

/// One day's bucket within a week view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub session_count: usize,
    pub total_secs: u64,
    /// Seconds per subject name within the day.
    pub by_subject: BTreeMap<String, u64>,
}

/// The seven dates of the week containing `reference + offset_weeks`,
/// starting on `week_start`.
pub fn week_dates(reference: NaiveDate, offset_weeks: i64, week_start: Weekday) -> [NaiveDate; 7] {
    let anchor = reference + Duration::weeks(offset_weeks);
    let days_into_week = (7 + anchor.weekday().num_days_from_sunday()
        - week_start.num_days_from_sunday())
        % 7;
    let start = anchor - Duration::days(i64::from(days_into_week));
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Bucket sessions into the seven days of the requested week.
///
/// A session belongs to a day when its completion timestamp falls inside
/// that day's `[00:00:00.000, 23:59:59.999]` window, i.e. its calendar
/// date matches.
pub fn weekly_activity(
    sessions: &[StudySession],
    reference: NaiveDate,
    offset_weeks: i64,
    week_start: Weekday,
) -> Vec<DayActivity> {
    week_dates(reference, offset_weeks, week_start)
        .into_iter()
        .map(|date| {
            let mut total_secs = 0u64;
            let mut session_count = 0usize;
            let mut by_subject: BTreeMap<String, u64> = BTreeMap::new();
            for session in sessions
                .iter()
                .filter(|s| s.completed_at.date_naive() == date)
            {
                total_secs += session.duration_secs;
                session_count += 1;
                *by_subject.entry(session.subject_name.clone()).or_default() +=
                    session.duration_secs;
            }
            DayActivity {
                date,
                session_count,
                total_secs,
                by_subject,
            }
        })
        .collect()
}

/// The day with the most recorded time, if any day has time at all.
pub fn best_day(week: &[DayActivity]) -> Option<&DayActivity> {
    week.iter()
        .filter(|d| d.total_secs > 0)
        .max_by_key(|d| d.total_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mood;
    use chrono::{TimeZone, Utc};

    fn session_on(date: NaiveDate, hour: u32, subject: &str, secs: u64) -> StudySession {
        let completed_at = Utc
            .with_ymd_and_hms(date.year(), date.month(), date.day(), hour, 30, 0)
            .unwrap();
        StudySession {
            id: format!("{date}-{hour}-{subject}"),
            subject_id: subject.into(),
            subject_name: subject.into(),
            duration_secs: secs,
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
    fn week_starts_on_monday() {
        // 2026-08-05 is a Wednesday.
        let days = week_dates(date(2026, 8, 5), 0, Weekday::Mon);
        assert_eq!(days[0], date(2026, 8, 3));
        assert_eq!(days[6], date(2026, 8, 9));
    }

    #[test]
    fn week_starts_on_sunday() {
        let days = week_dates(date(2026, 8, 5), 0, Weekday::Sun);
        assert_eq!(days[0], date(2026, 8, 2));
        assert_eq!(days[6], date(2026, 8, 8));
    }

    #[test]
    fn week_offset_shifts_whole_weeks() {
        let this_week = week_dates(date(2026, 8, 5), 0, Weekday::Mon);
        let last_week = week_dates(date(2026, 8, 5), -1, Weekday::Mon);
        assert_eq!(last_week[0], this_week[0] - Duration::days(7));
    }

    #[test]
    fn sessions_bucket_into_their_day() {
        let monday = date(2026, 8, 3);
        let sessions = vec![
            session_on(monday, 9, "Mathematics", 3600),
            session_on(monday, 20, "Physics", 1800),
            session_on(date(2026, 8, 4), 10, "Mathematics", 900),
            session_on(date(2026, 7, 30), 10, "Mathematics", 7200), // previous week
        ];
        let week = weekly_activity(&sessions, date(2026, 8, 5), 0, Weekday::Mon);

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].total_secs, 5400);
        assert_eq!(week[0].session_count, 2);
        assert_eq!(week[0].by_subject["Mathematics"], 3600);
        assert_eq!(week[0].by_subject["Physics"], 1800);
        assert_eq!(week[1].total_secs, 900);
        assert_eq!(week[2].total_secs, 0);
    }

    #[test]
    fn day_boundaries_are_midnight_to_midnight() {
        let monday = date(2026, 8, 3);
        let start_of_day = Utc.with_ymd_and_hms(2026, 8, 3, 0, 0, 0).unwrap();
        let end_of_day = Utc.with_ymd_and_hms(2026, 8, 3, 23, 59, 59).unwrap();
        let mut early = session_on(monday, 0, "Mathematics", 60);
        early.completed_at = start_of_day;
        let mut late = session_on(monday, 0, "Physics", 60);
        late.completed_at = end_of_day;

        let week = weekly_activity(&[early, late], monday, 0, Weekday::Mon);
        assert_eq!(week[0].session_count, 2);
    }

    #[test]
    fn best_day_requires_activity() {
        let week = weekly_activity(&[], date(2026, 8, 5), 0, Weekday::Mon);
        assert!(best_day(&week).is_none());

        let sessions = vec![session_on(date(2026, 8, 4), 9, "Mathematics", 3600)];
        let week = weekly_activity(&sessions, date(2026, 8, 5), 0, Weekday::Mon);
        assert_eq!(best_day(&week).unwrap().date, date(2026, 8, 4));
    }
}
