use colored::Colorize;
use trellomcp_core::types::List;

use crate::prelude::*;

pub mod archive;
pub mod create;
pub mod get;

/// List module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "list")]
#[command(about = "Trello list operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Get details of a list
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Create a new list on a board
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Archive (close) a list
    #[clap(name = "archive")]
    Archive(archive::ArchiveOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Get(options) => get::handler(options, global).await,
        Commands::Create(options) => create::handler(options, global).await,
        Commands::Archive(options) => archive::handler(options, global).await,
    }
}

fn display_list(list: &List) {
    std::println!("\n{} {}\n", list.name.bold().cyan(), list.id.bright_black());

    let mut table = new_table();

    if let Some(id_board) = &list.id_board {
        table.add_row(prettytable::row![
            "Board".bold().cyan(),
            id_board.bright_white().to_string()
        ]);
    }

    if let Some(pos) = list.pos {
        table.add_row(prettytable::row![
            "Position".bold().cyan(),
            pos.to_string().bright_yellow().to_string()
        ]);
    }

    if let Some(closed) = list.closed {
        let state = if closed {
            "archived".bright_black().to_string()
        } else {
            "open".green().to_string()
        };
        table.add_row(prettytable::row!["State".bold().cyan(), state]);
    }

    table.printstd();
    std::println!();
}
