use trellomcp_core::ids::extract_card_id;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct LabelsOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: LabelsOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Fetching labels on card {card_id}...");
    }

    let client = TrelloClient::from_env()?;
    let labels = client.get_card_labels(&card_id).await?;

    if options.json {
        print_json(&labels)?;
    } else {
        crate::label::display_labels(&labels);
    }

    Ok(())
}
