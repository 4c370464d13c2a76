//! Progress analytics over the session history.
//!
//! Every function here is a pure projection: no side effects, no hidden
//! counters, identical output for identical input. The owning caller holds
//! the session list; these fold it into display-ready summaries.

mod mood;
mod progress;
mod streaks;
mod weekly;

pub use mood::{mood_distribution, MoodShare};
pub use progress::{most_studied, overview, subject_progress, ProgressOverview, SubjectProgress};
pub use streaks::{streaks, StreakSummary};
pub use weekly::{best_day, week_dates, weekly_activity, DayActivity};
