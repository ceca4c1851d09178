use trellomcp_core::ids::extract_card_id;
use trellomcp_core::params::{CheckItemCreate, CheckItemUpdate, Position};

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

/// Checklist item commands
#[derive(Debug, clap::Subcommand)]
pub enum ItemCommands {
    /// List the items in a checklist
    #[clap(name = "list")]
    List(ItemListOptions),

    /// Add an item to a checklist
    #[clap(name = "add")]
    Add(ItemAddOptions),

    /// Update an item's name, state, or position
    #[clap(name = "update")]
    Update(ItemUpdateOptions),

    /// Delete an item from a checklist
    #[clap(name = "delete")]
    Delete(ItemDeleteOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ItemListOptions {
    /// Checklist id
    pub checklist_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ItemAddOptions {
    /// Checklist id
    pub checklist_id: String,

    /// Name/text of the new item
    pub name: String,

    /// Create the item already checked
    #[arg(long)]
    pub checked: bool,

    /// Position among sibling items: top, bottom, or a positive number
    #[arg(short, long)]
    pub pos: Option<Position>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ItemUpdateOptions {
    /// Card id, short link, or trello.com card URL (item updates route
    /// through the card)
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Checklist item id
    pub item_id: String,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New state: complete or incomplete
    #[arg(short, long)]
    pub state: Option<String>,

    /// New position: top, bottom, or a positive number
    #[arg(short, long)]
    pub pos: Option<Position>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ItemDeleteOptions {
    /// Checklist id
    pub checklist_id: String,

    /// Checklist item id
    pub item_id: String,
}

pub async fn handler(cmd: ItemCommands, global: crate::Global) -> Result<()> {
    match cmd {
        ItemCommands::List(options) => list(options, global).await,
        ItemCommands::Add(options) => add(options, global).await,
        ItemCommands::Update(options) => update(options, global).await,
        ItemCommands::Delete(options) => delete(options, global).await,
    }
}

async fn list(options: ItemListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching items in checklist {}...", options.checklist_id);
    }

    let client = TrelloClient::from_env()?;
    let items = client.get_checklist_items(&options.checklist_id).await?;

    if options.json {
        print_json(&items)?;
    } else if items.is_empty() {
        println!("No items found.");
    } else {
        super::display_items(&items);
    }

    Ok(())
}

async fn add(options: ItemAddOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "Adding item '{}' to checklist {}...",
            options.name, options.checklist_id
        );
    }

    let client = TrelloClient::from_env()?;
    let item = client
        .add_checklist_item(
            &options.checklist_id,
            &CheckItemCreate {
                name: options.name,
                checked: options.checked.then_some(true),
                pos: options.pos,
            },
        )
        .await?;

    if options.json {
        print_json(&item)?;
    } else {
        super::display_items(std::slice::from_ref(&item));
    }

    Ok(())
}

async fn update(options: ItemUpdateOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Updating checklist item {}...", options.item_id);
    }

    let client = TrelloClient::from_env()?;
    let item = client
        .update_checklist_item(
            &card_id,
            &options.item_id,
            &CheckItemUpdate {
                name: options.name,
                state: options.state,
                pos: options.pos,
            },
        )
        .await?;

    if options.json {
        print_json(&item)?;
    } else {
        super::display_items(std::slice::from_ref(&item));
    }

    Ok(())
}

async fn delete(options: ItemDeleteOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!(
            "Deleting item {} from checklist {}...",
            options.item_id, options.checklist_id
        );
    }

    let client = TrelloClient::from_env()?;
    client
        .delete_checklist_item(&options.checklist_id, &options.item_id)
        .await?;

    println!("Deleted checklist item {}", options.item_id);

    Ok(())
}
