use clap::Subcommand;
use studyflow_core::model::Mood;
use studyflow_core::{Config, MotivationClient, Store};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Record a mood check-in, then fetch a motivational message
    Log {
        /// poor, okay, good or excellent
        #[arg(long)]
        mood: String,
        /// Energy level, 1-5
        #[arg(long, default_value_t = 3)]
        energy: u8,
        /// Motivation level, 1-5
        #[arg(long, default_value_t = 3)]
        motivation: u8,
        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },
    /// List recorded mood entries
    List,
}

pub fn run(action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        MoodAction::Log {
            mood,
            energy,
            motivation,
            note,
        } => {
            let mood: Mood = mood.parse()?;
            let mut state = store
                .load_state()?
                .ok_or("no profile found; run `studyflow onboard` first")?;
            let entry = state.log_mood(mood, energy, motivation, note)?.clone();
            store.save_state(&state)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);

            // The check-in drives a one-shot motivation request; failure
            // only means the fallback message shows.
            let config = Config::load_or_default();
            let client = MotivationClient::new(&config.motivation.base_url)?;
            let mood_text = entry.note.clone().unwrap_or_else(|| mood.to_string());
            let runtime = tokio::runtime::Runtime::new()?;
            let message = runtime.block_on(client.fetch_or_fallback(&mood_text));
            println!("{}", serde_json::to_string_pretty(&message)?);
        }
        MoodAction::List => {
            let entries = store.load_mood_entries()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}
