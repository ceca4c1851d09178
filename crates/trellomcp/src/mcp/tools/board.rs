use serde::Deserialize;
use trellomcp_core::ids::extract_board_id;
use trellomcp_core::params::BoardCreate;

use super::{parse_args, text_result, tool_error, JsonRpcError, Tool};
use crate::prelude::{eprintln, *};
use crate::trello::TrelloClient;

pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: "list_boards".to_string(),
            description: "List all Trello boards for the authenticated user. Returns board objects with id, name, url, and other details.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        Tool {
            name: "get_board".to_string(),
            description: "Get details of a specific Trello board. Accepts a board ID, short link, or full trello.com board URL.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "board_id": {
                        "type": "string",
                        "description": "Board ID, short link, or trello.com board URL"
                    }
                },
                "required": ["board_id"]
            }),
        },
        Tool {
            name: "create_board".to_string(),
            description: "Create a new Trello board. Returns the created board including its assigned ID.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the new board"
                    },
                    "desc": {
                        "type": "string",
                        "description": "Optional description for the board"
                    }
                },
                "required": ["name"]
            }),
        },
    ]
}

pub async fn handle_list_boards(
    _arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    if global.verbose {
        eprintln!("Calling list_boards");
    }

    let boards = client.list_boards().await.map_err(tool_error)?;

    text_result(&boards)
}

pub async fn handle_get_board(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetBoardArgs {
        board_id: String,
    }

    let args: GetBoardArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling get_board: board_id={}", args.board_id);
    }

    let board_id = extract_board_id(&args.board_id).map_err(tool_error)?;
    let board = client.get_board(&board_id).await.map_err(tool_error)?;

    text_result(&board)
}

pub async fn handle_create_board(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CreateBoardArgs {
        name: String,
        desc: Option<String>,
    }

    let args: CreateBoardArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling create_board: name={}", args.name);
    }

    let board = client
        .create_board(&BoardCreate {
            name: args.name,
            desc: args.desc,
        })
        .await
        .map_err(tool_error)?;

    text_result(&board)
}
