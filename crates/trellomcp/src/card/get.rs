use trellomcp_core::ids::extract_card_id;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GetOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Fetching card {card_id}...");
    }

    let client = TrelloClient::from_env()?;
    let card = client.get_card(&card_id).await?;

    if options.json {
        print_json(&card)?;
    } else {
        super::display_card(&card);
    }

    Ok(())
}
