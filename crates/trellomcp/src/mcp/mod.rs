//! Model Context Protocol server.
//!
//! Hand-rolled JSON-RPC 2.0 over two transports: newline-delimited stdio
//! and SSE/HTTP. Credentials are validated and the Trello client is built
//! once, before a transport starts, so a bad setup fails at launch instead
//! of on the first tool call.

mod cli;
mod resources;
mod sse;
mod stdio;
mod tools;

pub use cli::App;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::trello::{TrelloClient, TrelloConfig};

// JSON-RPC 2.0 types
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    method: String,
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    jsonrpc: String,
    id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// MCP Protocol types
#[derive(Debug, Serialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = TrelloConfig::from_env()?;
    let client = Arc::new(TrelloClient::new(config)?);

    match app.command {
        cli::Commands::Stdio => stdio::run_stdio(client, global).await,
        cli::Commands::Sse(options) => sse::run_sse(options, client, global).await,
    }
}

pub async fn handle_request(
    request_str: &str,
    client: &TrelloClient,
    global: &crate::Global,
) -> JsonRpcResponse {
    let request: JsonRpcRequest = match serde_json::from_str(request_str) {
        Ok(req) => req,
        Err(e) => {
            return JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(JsonRpcError {
                    code: -32700,
                    message: f!("Parse error: {e}"),
                    data: None,
                }),
            };
        }
    };

    if request.jsonrpc != "2.0" {
        return JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(JsonRpcError {
                code: -32600,
                message: f!("Invalid request: unsupported jsonrpc version {:?}", request.jsonrpc),
                data: None,
            }),
        };
    }

    let result = match request.method.as_str() {
        "initialize" => tools::handle_initialize(),
        "tools/list" => tools::handle_tools_list(),
        "tools/call" => tools::handle_tools_call(request.params, client, global).await,
        "resources/list" | "resources/templates/list" => resources::handle_resources_list(),
        "resources/read" => resources::handle_resources_read(request.params, client, global).await,
        method => Err(JsonRpcError {
            code: -32601,
            message: f!("Method not found: {method}"),
            data: None,
        }),
    };

    match result {
        Ok(value) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(value),
            error: None,
        },
        Err(error) => JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(error),
        },
    }
}
