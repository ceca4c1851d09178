use trellomcp_core::ids::extract_card_id;
use trellomcp_core::params::{ChecklistCreate, Position};

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, Clone)]
pub struct CreateOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Name of the new checklist
    pub name: String,

    /// Position among the card's checklists: top, bottom, or a positive number
    #[arg(short, long)]
    pub pos: Option<Position>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: CreateOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Creating checklist '{}' on card {card_id}...", options.name);
    }

    let client = TrelloClient::from_env()?;
    let checklist = client
        .create_checklist(&ChecklistCreate {
            id_card: card_id,
            name: options.name,
            pos: options.pos,
        })
        .await?;

    if options.json {
        print_json(&checklist)?;
    } else {
        super::display_checklist(&checklist);
    }

    Ok(())
}
