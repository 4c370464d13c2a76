use clap::Subcommand;
use studyflow_core::model::ResourceKind;
use studyflow_core::Store;

#[derive(Subcommand)]
pub enum ResourceAction {
    /// Add a resource for a subject
    Add {
        title: String,
        /// link, file, note, video or book
        #[arg(long, default_value = "link")]
        kind: String,
        /// Subject id or name from the profile
        #[arg(long)]
        subject: String,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// List resources with optional filters
    List {
        /// Filter by subject id or name
        #[arg(long)]
        subject: Option<String>,
        /// Filter by kind
        #[arg(long)]
        kind: Option<String>,
        /// Only favorites
        #[arg(long)]
        favorites: bool,
    },
    /// Remove a resource by id
    Remove { id: String },
    /// Toggle a resource's favorite flag
    Favorite { id: String },
}

pub fn run(action: ResourceAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut state = store
        .load_state()?
        .ok_or("no profile found; run `studyflow onboard` first")?;

    match action {
        ResourceAction::Add {
            title,
            kind,
            subject,
            url,
            content,
            tags,
        } => {
            let kind: ResourceKind = kind.parse()?;
            let subject_id = state
                .profile
                .subjects
                .iter()
                .find(|s| s.id == subject || s.name.eq_ignore_ascii_case(&subject))
                .map(|s| s.id.clone())
                .ok_or_else(|| format!("no subject matches '{subject}'"))?;
            let resource = state
                .add_resource(title, kind, subject_id, url, content, tags)
                .clone();
            store.save_state(&state)?;
            println!("{}", serde_json::to_string_pretty(&resource)?);
        }
        ResourceAction::List {
            subject,
            kind,
            favorites,
        } => {
            let kind = kind.map(|k| k.parse::<ResourceKind>()).transpose()?;
            let subject_id = subject.and_then(|needle| {
                state
                    .profile
                    .subjects
                    .iter()
                    .find(|s| s.id == needle || s.name.eq_ignore_ascii_case(&needle))
                    .map(|s| s.id.clone())
                    .or(Some(needle))
            });
            let filtered = state.filter_resources(subject_id.as_deref(), kind, favorites);
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        ResourceAction::Remove { id } => {
            if !state.remove_resource(&id) {
                return Err(format!("no resource with id '{id}'").into());
            }
            store.save_state(&state)?;
            println!("{{\"type\": \"resource_removed\"}}");
        }
        ResourceAction::Favorite { id } => {
            let favorite = state
                .toggle_favorite(&id)
                .ok_or_else(|| format!("no resource with id '{id}'"))?;
            store.save_state(&state)?;
            println!("{{\"type\": \"resource_favorite\", \"favorite\": {favorite}}}");
        }
    }
    Ok(())
}
