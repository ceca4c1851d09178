use trellomcp_core::params::{CardCreate, Position};

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, Clone)]
pub struct CreateOptions {
    /// List id the card is created in
    #[clap(env = "TRELLO_LIST_ID")]
    pub list_id: String,

    /// Name of the new card
    pub name: String,

    /// Optional description
    #[arg(short, long)]
    pub desc: Option<String>,

    /// Position among sibling cards: top, bottom, or a positive number
    #[arg(short, long)]
    pub pos: Option<Position>,

    /// Due date, ISO 8601 (e.g. 2026-01-25T12:00:00.000Z)
    #[arg(long)]
    pub due: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: CreateOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "Creating card '{}' in list {}...",
            options.name, options.list_id
        );
    }

    let client = TrelloClient::from_env()?;
    let card = client
        .create_card(&CardCreate {
            id_list: options.list_id,
            name: options.name,
            desc: options.desc,
            pos: options.pos,
            due: options.due,
        })
        .await?;

    if options.json {
        print_json(&card)?;
    } else {
        super::display_card(&card);
    }

    Ok(())
}
