use trellomcp_core::ids::extract_board_id;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Board id, short link, or trello.com board URL
    #[clap(env = "TRELLO_BOARD_ID")]
    pub board: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let board_id = extract_board_id(&options.board)?;

    if global.verbose {
        println!("Fetching labels on board {board_id}...");
    }

    let client = TrelloClient::from_env()?;
    let labels = client.get_board_labels(&board_id).await?;

    if options.json {
        print_json(&labels)?;
    } else {
        super::display_labels(&labels);
    }

    Ok(())
}
