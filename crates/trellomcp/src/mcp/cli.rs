#[derive(Debug, clap::Parser)]
#[command(name = "mcp")]
#[command(about = "Model Context Protocol server exposing Trello tools and resources")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Serve MCP over newline-delimited JSON-RPC on stdin/stdout
    #[clap(name = "stdio")]
    Stdio,

    /// Serve MCP over SSE/HTTP
    #[clap(name = "sse")]
    Sse(SseOptions),
}

#[derive(Debug, clap::Args)]
pub struct SseOptions {
    /// Port to listen on
    #[arg(short, long, env = "TRELLOMCP_SSE_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "TRELLOMCP_SSE_HOST", default_value = "127.0.0.1")]
    pub host: String,
}
