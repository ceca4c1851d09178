use trellomcp_core::ids::extract_board_id;
use trellomcp_core::params::{ListCreate, Position};

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, Clone)]
pub struct CreateOptions {
    /// Board id, short link, or trello.com board URL
    #[clap(env = "TRELLO_BOARD_ID")]
    pub board: String,

    /// Name of the new list
    pub name: String,

    /// Position among sibling lists: top, bottom, or a positive number
    #[arg(short, long)]
    pub pos: Option<Position>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: CreateOptions, global: crate::Global) -> Result<()> {
    let board_id = extract_board_id(&options.board)?;

    if global.verbose {
        println!("Creating list '{}' on board {board_id}...", options.name);
    }

    let client = TrelloClient::from_env()?;
    let list = client
        .create_list(
            &board_id,
            &ListCreate {
                name: options.name,
                pos: options.pos,
            },
        )
        .await?;

    if options.json {
        print_json(&list)?;
    } else {
        super::display_list(&list);
    }

    Ok(())
}
