use trellomcp_core::params::BoardCreate;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CreateOptions {
    /// Name of the new board
    pub name: String,

    /// Optional description
    #[arg(short, long)]
    pub desc: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: CreateOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Creating board '{}'...", options.name);
    }

    let client = TrelloClient::from_env()?;
    let board = client
        .create_board(&BoardCreate {
            name: options.name,
            desc: options.desc,
        })
        .await?;

    if options.json {
        print_json(&board)?;
    } else {
        super::display_board(&board);
    }

    Ok(())
}
