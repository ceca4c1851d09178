use trellomcp_core::ids::extract_card_id;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct DeleteOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,
}

pub async fn handler(options: DeleteOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Deleting card {card_id}...");
    }

    let client = TrelloClient::from_env()?;
    client.delete_card(&card_id).await?;

    println!("Deleted card {card_id}");

    Ok(())
}
