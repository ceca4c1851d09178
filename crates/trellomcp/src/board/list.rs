use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching boards...");
    }

    let client = TrelloClient::from_env()?;
    let boards = client.list_boards().await?;

    if options.json {
        print_json(&boards)?;
    } else {
        super::display_boards(&boards);
    }

    Ok(())
}
