use colored::Colorize;
use trellomcp_core::ids::extract_board_id;
use trellomcp_core::types::List;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListsOptions {
    /// Board id, short link, or trello.com board URL
    #[clap(env = "TRELLO_BOARD_ID")]
    pub board: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: ListsOptions, global: crate::Global) -> Result<()> {
    let board_id = extract_board_id(&options.board)?;

    if global.verbose {
        println!("Fetching lists for board {board_id}...");
    }

    let client = TrelloClient::from_env()?;
    let lists = client.get_board_lists(&board_id).await?;

    if options.json {
        print_json(&lists)?;
    } else {
        display_lists(&lists);
    }

    Ok(())
}

pub(crate) fn display_lists(lists: &[List]) {
    if lists.is_empty() {
        std::println!("No lists found.");
        return;
    }

    let mut table = new_table();
    for list in lists {
        let state = match list.closed {
            Some(true) => "archived".bright_black().to_string(),
            _ => "open".green().to_string(),
        };
        table.add_row(prettytable::row![
            list.id.bright_black(),
            list.name.bright_white().bold(),
            state
        ]);
    }
    table.printstd();
}
