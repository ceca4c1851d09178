use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GetOptions {
    /// Checklist id
    pub checklist_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: GetOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching checklist {}...", options.checklist_id);
    }

    let client = TrelloClient::from_env()?;
    let checklist = client.get_checklist(&options.checklist_id).await?;

    if options.json {
        print_json(&checklist)?;
    } else {
        super::display_checklist(&checklist);
    }

    Ok(())
}
