use trellomcp_core::ids::extract_card_id;
use trellomcp_core::params::CardUpdate;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct UpdateOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New description
    #[arg(short, long)]
    pub desc: Option<String>,

    /// Move the card to this list
    #[arg(short, long)]
    pub list: Option<String>,

    /// New due date, ISO 8601
    #[arg(long)]
    pub due: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: UpdateOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Updating card {card_id}...");
    }

    let client = TrelloClient::from_env()?;
    let card = client
        .update_card(
            &card_id,
            &CardUpdate {
                name: options.name,
                desc: options.desc,
                id_list: options.list,
                due: options.due,
                due_complete: None,
            },
        )
        .await?;

    if options.json {
        print_json(&card)?;
    } else {
        super::display_card(&card);
    }

    Ok(())
}
