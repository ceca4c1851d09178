use trellomcp_core::ids::extract_board_id;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GetOptions {
    /// Board id, short link, or trello.com board URL
    #[clap(env = "TRELLO_BOARD_ID")]
    pub board: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let board_id = extract_board_id(&options.board)?;

    if global.verbose {
        println!("Fetching board {board_id}...");
    }

    let client = TrelloClient::from_env()?;
    let board = client.get_board(&board_id).await?;

    if options.json {
        print_json(&board)?;
    } else {
        super::display_board(&board);
    }

    Ok(())
}
