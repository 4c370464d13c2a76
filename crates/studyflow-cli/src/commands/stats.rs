use chrono::Utc;
use clap::Subcommand;
use studyflow_core::{stats, Store};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Whole-history totals
    Overview,
    /// Per-subject progress against target hours
    Subjects,
    /// Seven-day activity buckets
    Weekly {
        /// Weeks back (negative) or forward from the current week
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },
    /// Mood distribution over all sessions
    Mood,
    /// Current and longest study streaks
    Streaks,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let sessions = store.load_sessions()?;

    match action {
        StatsAction::Overview => {
            println!("{}", serde_json::to_string_pretty(&stats::overview(&sessions))?);
        }
        StatsAction::Subjects => {
            let profile = store
                .load_profile()?
                .ok_or("no profile found; run `studyflow onboard` first")?;
            let progress = stats::subject_progress(&profile.subjects, &sessions);
            println!("{}", serde_json::to_string_pretty(&progress)?);
        }
        StatsAction::Weekly { offset } => {
            let week_start = store
                .load_profile()?
                .map(|p| p.settings.week_starts_on.weekday())
                .unwrap_or(chrono::Weekday::Mon);
            let week =
                stats::weekly_activity(&sessions, Utc::now().date_naive(), offset, week_start);
            println!("{}", serde_json::to_string_pretty(&week)?);
        }
        StatsAction::Mood => {
            println!(
                "{}",
                serde_json::to_string_pretty(&stats::mood_distribution(&sessions))?
            );
        }
        StatsAction::Streaks => {
            let summary = stats::streaks(&sessions, Utc::now().date_naive());
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
