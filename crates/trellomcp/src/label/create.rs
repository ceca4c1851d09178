use trellomcp_core::ids::extract_board_id;
use trellomcp_core::params::LabelCreate;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CreateOptions {
    /// Board id, short link, or trello.com board URL
    #[clap(env = "TRELLO_BOARD_ID")]
    pub board: String,

    /// Name of the new label
    pub name: String,

    /// Label color (green, yellow, orange, red, purple, blue, sky, lime,
    /// pink, black); omit for no color
    #[arg(short, long)]
    pub color: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: CreateOptions, global: crate::Global) -> Result<()> {
    let board_id = extract_board_id(&options.board)?;

    if global.verbose {
        println!("Creating label '{}' on board {board_id}...", options.name);
    }

    let client = TrelloClient::from_env()?;
    let label = client
        .create_label(&LabelCreate {
            id_board: board_id,
            name: options.name,
            color: options.color,
        })
        .await?;

    if options.json {
        print_json(&label)?;
    } else {
        super::display_label(&label);
    }

    Ok(())
}
