use colored::Colorize;
use trellomcp_core::types::{CheckItem, Checklist};

use crate::prelude::*;

pub mod create;
pub mod delete;
pub mod get;
pub mod items;
pub mod list;
pub mod update;

/// Checklist module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "checklist")]
#[command(about = "Trello checklist operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List the checklists on a card
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Get details of a checklist
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Create a new checklist on a card
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Update a checklist's name or position
    #[clap(name = "update")]
    Update(update::UpdateOptions),

    /// Delete a checklist
    #[clap(name = "delete")]
    Delete(delete::DeleteOptions),

    /// Manage checklist items
    #[command(subcommand)]
    Item(items::ItemCommands),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::List(options) => list::handler(options, global).await,
        Commands::Get(options) => get::handler(options, global).await,
        Commands::Create(options) => create::handler(options, global).await,
        Commands::Update(options) => update::handler(options, global).await,
        Commands::Delete(options) => delete::handler(options, global).await,
        Commands::Item(cmd) => items::handler(cmd, global).await,
    }
}

fn display_checklist(checklist: &Checklist) {
    std::println!(
        "\n{} {}\n",
        checklist.name.bold().cyan(),
        checklist.id.bright_black()
    );

    if checklist.check_items.is_empty() {
        std::println!("No items.");
    } else {
        display_items(&checklist.check_items);
    }

    std::println!();
}

fn display_checklists(checklists: &[Checklist]) {
    if checklists.is_empty() {
        std::println!("No checklists found.");
        return;
    }

    for checklist in checklists {
        display_checklist(checklist);
    }
}

fn display_items(items: &[CheckItem]) {
    let mut table = new_table();
    for item in items {
        let mark = match item.state.as_deref() {
            Some("complete") => "[x]".green().to_string(),
            _ => "[ ]".bright_black().to_string(),
        };
        table.add_row(prettytable::row![
            mark,
            item.id.bright_black(),
            item.name.bright_white().to_string()
        ]);
    }
    table.printstd();
}
