use clap::Args;
use studyflow_core::onboarding::{OnboardingWizard, SubjectDraft};
use studyflow_core::Store;

#[derive(Args)]
pub struct OnboardArgs {
    /// Display name
    #[arg(long)]
    name: String,
    /// Email address
    #[arg(long)]
    email: String,
    /// Study goal (repeatable)
    #[arg(long = "goal")]
    goals: Vec<String>,
    /// Subject as NAME[:TARGET_HOURS] (repeatable)
    #[arg(long = "subject")]
    subjects: Vec<String>,
    /// Preferred time slot, e.g. 08:00-10:00 (repeatable)
    #[arg(long = "time")]
    times: Vec<String>,
    /// Preferred session length in minutes
    #[arg(long, default_value_t = 60)]
    session_length: u32,
    /// Replace an existing profile
    #[arg(long)]
    force: bool,
}

fn parse_subject(spec: &str, position: usize) -> Result<SubjectDraft, Box<dyn std::error::Error>> {
    match spec.rsplit_once(':') {
        Some((name, hours)) => {
            let target_hours: f64 = hours
                .parse()
                .map_err(|_| format!("invalid target hours in '{spec}'"))?;
            let mut draft = SubjectDraft::new(name, position);
            draft.target_hours = target_hours;
            Ok(draft)
        }
        None => Ok(SubjectDraft::new(spec, position)),
    }
}

pub fn run(args: OnboardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    if store.load_profile()?.is_some() && !args.force {
        return Err("a profile already exists; pass --force to replace it".into());
    }

    let mut wizard = OnboardingWizard::new();
    wizard.name = args.name;
    wizard.email = args.email;
    wizard.goals = args.goals;
    wizard.subjects = args
        .subjects
        .iter()
        .enumerate()
        .map(|(i, spec)| parse_subject(spec, i))
        .collect::<Result<_, _>>()?;
    wizard.preferred_study_times = args.times;
    wizard.session_length_min = args.session_length;

    // Walk every step so the same validation gates the CLI as would gate
    // the interactive flow.
    while !wizard.is_last_step() {
        wizard.advance()?;
    }
    let profile = wizard.finish()?;

    // Only the profile key is written; the other keys keep (or lazily
    // seed) their own values.
    store.save_profile(&profile)?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
