use trellomcp_core::ids::extract_card_id;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Fetching checklists on card {card_id}...");
    }

    let client = TrelloClient::from_env()?;
    let checklists = client.get_card_checklists(&card_id).await?;

    if options.json {
        print_json(&checklists)?;
    } else {
        super::display_checklists(&checklists);
    }

    Ok(())
}
