use colored::Colorize;
use trellomcp_core::types::Board;

use crate::prelude::*;

pub mod create;
pub mod get;
pub mod list;
pub mod lists;

/// Board module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "board")]
#[command(about = "Trello board operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List all boards for the authenticated member
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Get details of a board
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Create a new board
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// List the lists on a board
    #[clap(name = "lists")]
    Lists(lists::ListsOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::List(options) => list::handler(options, global).await,
        Commands::Get(options) => get::handler(options, global).await,
        Commands::Create(options) => create::handler(options, global).await,
        Commands::Lists(options) => lists::handler(options, global).await,
    }
}

/// Render one board as the standard detail view.
fn display_board(board: &Board) {
    std::println!(
        "\n{} {}\n",
        board.name.bold().cyan(),
        board.id.bright_black()
    );

    let mut table = new_table();

    if let Some(url) = &board.url {
        table.add_row(prettytable::row![
            "URL".bold().cyan(),
            url.cyan().underline().to_string()
        ]);
    }

    if let Some(closed) = board.closed {
        let state = if closed {
            "closed".bright_black().to_string()
        } else {
            "open".green().to_string()
        };
        table.add_row(prettytable::row!["State".bold().cyan(), state]);
    }

    table.printstd();

    if let Some(desc) = board.desc.as_deref().filter(|d| !d.is_empty()) {
        std::println!("\n{}:", "Description".bold().cyan());
        std::println!("{desc}");
    }

    std::println!();
}

/// Render a set of boards as a compact table.
fn display_boards(boards: &[Board]) {
    if boards.is_empty() {
        std::println!("No boards found.");
        return;
    }

    let mut table = new_table();
    for board in boards {
        let state = match board.closed {
            Some(true) => "closed".bright_black().to_string(),
            _ => "open".green().to_string(),
        };
        table.add_row(prettytable::row![
            board.id.bright_black(),
            board.name.bright_white().bold(),
            state,
            board.url.as_deref().unwrap_or("").cyan().to_string()
        ]);
    }
    table.printstd();
}
