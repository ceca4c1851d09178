use crate::prelude::*;
use clap::Parser;

mod board;
mod card;
mod checklist;
mod label;
mod list;
mod mcp;
mod prelude;
mod trello;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Trello boards, lists, and cards from the command line, plus an MCP server that exposes them to LLM agents"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "TRELLOMCP_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Board operations
    Board(crate::board::App),

    /// List operations
    List(crate::list::App),

    /// Card operations
    Card(crate::card::App),

    /// Label operations
    Label(crate::label::App),

    /// Checklist operations
    Checklist(crate::checklist::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Board(sub_app) => crate::board::run(sub_app, app.global).await,
        SubCommands::List(sub_app) => crate::list::run(sub_app, app.global).await,
        SubCommands::Card(sub_app) => crate::card::run(sub_app, app.global).await,
        SubCommands::Label(sub_app) => crate::label::run(sub_app, app.global).await,
        SubCommands::Checklist(sub_app) => crate::checklist::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
