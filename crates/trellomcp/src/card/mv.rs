use trellomcp_core::ids::extract_card_id;
use trellomcp_core::params::{CardMove, Position};

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, Clone)]
pub struct MoveOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Destination list id
    pub list_id: String,

    /// Position in the destination list: top, bottom, or a positive number
    #[arg(short, long)]
    pub pos: Option<Position>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: MoveOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Moving card {card_id} to list {}...", options.list_id);
    }

    let client = TrelloClient::from_env()?;
    let card = client
        .move_card(
            &card_id,
            &CardMove {
                id_list: options.list_id,
                pos: options.pos,
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
