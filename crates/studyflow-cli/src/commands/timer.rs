use std::io::Write;

use chrono::Utc;
use clap::Subcommand;
use studyflow_core::model::SubjectRef;
use studyflow_core::timer::{DurationKind, Ticker};
use studyflow_core::{Config, Event, SessionDraft, Store, TimerEngine, TimerState};

const ENGINE_KEY: &str = "timer_engine";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Drive the countdown live until the interval completes or Ctrl-C stops it
    Run,
    /// Start (or resume) the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Stop the timer, recording the study session when long enough
    Stop,
    /// Reset to an idle study countdown
    Reset,
    /// Print the current timer state as JSON
    Status,
    /// Change a configured duration
    Set {
        /// "study" or "break"
        kind: String,
        /// New duration in minutes
        minutes: u32,
    },
    /// Select the subject the next study session is billed to
    Subject {
        /// Subject id or name from the profile
        subject: String,
    },
}

fn load_engine(store: &Store, config: &Config) -> TimerEngine {
    if let Ok(Some(json)) = store.kv_get(ENGINE_KEY) {
        if let Ok(engine) = serde_json::from_str::<TimerEngine>(&json) {
            return engine;
        }
    }
    TimerEngine::new(config.timer_config())
}

fn save_engine(store: &Store, engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    store.kv_set(ENGINE_KEY, &json)?;
    Ok(())
}

fn parse_kind(kind: &str) -> Result<DurationKind, Box<dyn std::error::Error>> {
    match kind.to_ascii_lowercase().as_str() {
        "study" => Ok(DurationKind::Study),
        "break" => Ok(DurationKind::Break),
        other => Err(format!("unknown duration kind: {other} (expected study or break)").into()),
    }
}

/// Record a stopped study interval into the app state.
fn record_draft(store: &Store, draft: &SessionDraft) -> Result<(), Box<dyn std::error::Error>> {
    match store.load_state()? {
        Some(mut state) => {
            let session = state.record_session(draft);
            store.save_state(&state)?;
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        None => {
            eprintln!("no profile found; run `studyflow onboard` first -- session not recorded");
        }
    }
    Ok(())
}

fn handle_stop(store: &Store, event: Option<Event>) -> Result<(), Box<dyn std::error::Error>> {
    match event {
        Some(Event::TimerStopped { draft: Some(draft), .. }) => record_draft(store, &draft),
        Some(Event::TimerStopped { draft: None, at }) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&Event::TimerStopped { draft: None, at })?
            );
            Ok(())
        }
        _ => {
            eprintln!("timer is already idle");
            Ok(())
        }
    }
}

async fn run_live(
    store: &Store,
    engine: &mut TimerEngine,
) -> Result<(), Box<dyn std::error::Error>> {
    if engine.state() != TimerState::Running {
        let Some(event) = engine.start() else {
            return Err("select a subject first: studyflow timer subject <name>".into());
        };
        println!("{}", serde_json::to_string_pretty(&event)?);
    }

    let mut ticker = Ticker::spawn();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!();
                handle_stop(store, engine.stop())?;
                break;
            }
            tick = ticker.tick() => {
                if tick.is_none() {
                    break;
                }
                if let Some(event) = engine.tick() {
                    println!();
                    println!("{}", serde_json::to_string_pretty(&event)?);
                    break;
                }
                let remaining = engine.remaining_secs();
                print!("\r{:02}:{:02} ", remaining / 60, remaining % 60);
                std::io::stdout().flush()?;
            }
        }
    }
    ticker.cancel();
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let config = Config::load_or_default();
    let mut engine = load_engine(&store, &config);

    // Account for wall-clock time that passed since the last invocation.
    // A completion that happened in the meantime is visible in the
    // snapshot; each command still prints exactly one JSON document.
    engine.catch_up(Utc::now());

    match action {
        TimerAction::Run => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_live(&store, &mut engine))?;
        }
        TimerAction::Start | TimerAction::Resume => match engine.start() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => {
                if engine.subject().is_none() {
                    return Err("select a subject first: studyflow timer subject <name>".into());
                }
                eprintln!("timer is already running");
            }
        },
        TimerAction::Pause => match engine.pause() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => eprintln!("timer is not running"),
        },
        TimerAction::Stop => {
            handle_stop(&store, engine.stop())?;
        }
        TimerAction::Reset => {
            if let Some(event) = engine.reset() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Set { kind, minutes } => {
            let event = engine.set_duration(parse_kind(&kind)?, minutes)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Subject { subject } => {
            let profile = store
                .load_profile()?
                .ok_or("no profile found; run `studyflow onboard` first")?;
            let found = profile
                .subjects
                .iter()
                .find(|s| s.id == subject || s.name.eq_ignore_ascii_case(&subject))
                .ok_or_else(|| format!("no subject matches '{subject}'"))?;
            let event = engine.select_subject(Some(SubjectRef::from(found)))?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    save_engine(&store, &engine)?;
    Ok(())
}
