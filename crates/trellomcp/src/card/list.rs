use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// List id
    #[clap(env = "TRELLO_LIST_ID")]
    pub list_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching cards in list {}...", options.list_id);
    }

    let client = TrelloClient::from_env()?;
    let cards = client.list_cards(&options.list_id).await?;

    if options.json {
        print_json(&cards)?;
    } else {
        super::display_cards(&cards);
    }

    Ok(())
}
