use colored::Colorize;
use trellomcp_core::types::Card;

use crate::prelude::*;

pub mod create;
pub mod delete;
pub mod due;
pub mod get;
pub mod labels;
pub mod list;
pub mod mv;
pub mod update;

/// Card module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "card")]
#[command(about = "Trello card operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List the cards in a list
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Get details of a card
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Create a new card in a list
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Update fields of a card; unspecified fields are left untouched
    #[clap(name = "update")]
    Update(update::UpdateOptions),

    /// Delete a card
    #[clap(name = "delete")]
    Delete(delete::DeleteOptions),

    /// Move a card to another list
    #[clap(name = "move")]
    Move(mv::MoveOptions),

    /// List the labels on a card
    #[clap(name = "labels")]
    Labels(labels::LabelsOptions),

    /// Manage the card's due date
    #[command(subcommand)]
    Due(due::DueCommands),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::List(options) => list::handler(options, global).await,
        Commands::Get(options) => get::handler(options, global).await,
        Commands::Create(options) => create::handler(options, global).await,
        Commands::Update(options) => update::handler(options, global).await,
        Commands::Delete(options) => delete::handler(options, global).await,
        Commands::Move(options) => mv::handler(options, global).await,
        Commands::Labels(options) => labels::handler(options, global).await,
        Commands::Due(cmd) => due::handler(cmd, global).await,
    }
}

/// Render one card as the standard detail view.
fn display_card(card: &Card) {
    std::println!("\n{} {}\n", card.name.bold().cyan(), card.id.bright_black());

    let mut table = new_table();

    if let Some(id_list) = &card.id_list {
        table.add_row(prettytable::row![
            "List".bold().cyan(),
            id_list.bright_white().to_string()
        ]);
    }

    if let Some(id_board) = &card.id_board {
        table.add_row(prettytable::row![
            "Board".bold().cyan(),
            id_board.bright_white().to_string()
        ]);
    }

    if let Some(url) = &card.url {
        table.add_row(prettytable::row![
            "URL".bold().cyan(),
            url.cyan().underline().to_string()
        ]);
    }

    if let Some(due) = &card.due {
        let done = matches!(card.due_complete, Some(true));
        let due_colored = if done {
            due.green().to_string()
        } else {
            due.yellow().to_string()
        };
        table.add_row(prettytable::row!["Due".bold().cyan(), due_colored]);
    }

    if let Some(pos) = card.pos {
        table.add_row(prettytable::row![
            "Position".bold().cyan(),
            pos.to_string().bright_yellow().to_string()
        ]);
    }

    table.printstd();

    if let Some(desc) = card.desc.as_deref().filter(|d| !d.is_empty()) {
        std::println!("\n{}:", "Description".bold().cyan());
        std::println!("{desc}");
    }

    if !card.labels.is_empty() {
        let names: Vec<_> = card.labels.iter().map(|l| l.name.as_str()).collect();
        std::println!(
            "\n{}: {}",
            "Labels".bold().cyan(),
            names.join(", ").bright_green()
        );
    }

    std::println!();
}

/// Render a set of cards as a compact table.
fn display_cards(cards: &[Card]) {
    if cards.is_empty() {
        std::println!("No cards found.");
        return;
    }

    let mut table = new_table();
    for card in cards {
        let due = card.due.as_deref().unwrap_or("");
        table.add_row(prettytable::row![
            card.id.bright_black(),
            card.name.bright_white().bold(),
            due.yellow().to_string()
        ]);
    }
    table.printstd();
}
