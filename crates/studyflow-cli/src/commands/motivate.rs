use clap::Args;
use studyflow_core::{Config, MotivationClient};

#[derive(Args)]
pub struct MotivateArgs {
    /// Mood text sent to the endpoint
    #[arg(default_value = "good")]
    text: String,
}

pub fn run(args: MotivateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let client = MotivationClient::new(&config.motivation.base_url)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let message = runtime.block_on(client.fetch_or_fallback(&args.text));
    println!("{}", serde_json::to_string_pretty(&message)?);
    Ok(())
}
