use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studyflow", version, about = "StudyFlow CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Timer control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Create the user profile
    Onboard(commands::onboard::OnboardArgs),
    /// Progress analytics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Mood check-ins
    Mood {
        #[command(subcommand)]
        action: commands::mood::MoodAction,
    },
    /// Fetch a motivational message
    Motivate(commands::motivate::MotivateArgs),
    /// Today's planned sessions
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Study resources
    Resource {
        #[command(subcommand)]
        action: commands::resource::ResourceAction,
    },
    /// Profile inspection and export
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions { shell: clap_complete::Shell },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Onboard(args) => commands::onboard::run(args),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Mood { action } => commands::mood::run(action),
        Commands::Motivate(args) => commands::motivate::run(args),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Resource { action } => commands::resource::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "studyflow",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
