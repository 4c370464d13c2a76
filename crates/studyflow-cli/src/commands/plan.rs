use chrono::NaiveTime;
use clap::Subcommand;
use studyflow_core::Store;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Show today's planned sessions
    Show,
    /// Add a planned session
    Add {
        /// Subject id or name from the profile
        #[arg(long)]
        subject: String,
        /// Start time of day, HH:MM
        #[arg(long)]
        start: String,
        /// End time of day, HH:MM
        #[arg(long)]
        end: String,
    },
    /// Remove every planned session
    Clear,
}

fn parse_time(field: &str, value: &str) -> Result<NaiveTime, Box<dyn std::error::Error>> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| format!("invalid {field} time '{value}' (expected HH:MM)").into())
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        PlanAction::Show => {
            let plan = store.load_todays_plan()?;
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        PlanAction::Add {
            subject,
            start,
            end,
        } => {
            let mut state = store
                .load_state()?
                .ok_or("no profile found; run `studyflow onboard` first")?;
            let found = state
                .profile
                .subjects
                .iter()
                .find(|s| s.id == subject || s.name.eq_ignore_ascii_case(&subject))
                .ok_or_else(|| format!("no subject matches '{subject}'"))?
                .clone();

            let start_time = parse_time("start", &start)?;
            let end_time = parse_time("end", &end)?;
            if end_time <= start_time {
                return Err("end time must be after start time".into());
            }
            let duration_min = (end_time - start_time).num_minutes() as u32;

            let planned = state
                .add_planned_session(
                    found.id.clone(),
                    found.name.clone(),
                    start,
                    end,
                    duration_min,
                    found.color.clone(),
                )
                .clone();
            store.save_state(&state)?;
            println!("{}", serde_json::to_string_pretty(&planned)?);
        }
        PlanAction::Clear => {
            store.save_todays_plan(&[])?;
            println!("{{\"type\": \"plan_cleared\"}}");
        }
    }
    Ok(())
}
