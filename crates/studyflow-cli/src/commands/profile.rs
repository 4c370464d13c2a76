use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use studyflow_core::export;
use studyflow_core::Store;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the profile as JSON
    Show,
    /// Write the profile export document to a file
    Export {
        /// Output path; defaults to studyflow-data-YYYY-MM-DD.json
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let profile = store
        .load_profile()?
        .ok_or("no profile found; run `studyflow onboard` first")?;

    match action {
        ProfileAction::Show => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        ProfileAction::Export { out } => {
            let json = export::export_json(&profile)?;
            let path = out.unwrap_or_else(|| {
                PathBuf::from(export::export_file_name(Utc::now().date_naive()))
            });
            std::fs::write(&path, json)?;
            println!("exported to {}", path.display());
        }
    }
    Ok(())
}
