use serde::Deserialize;
use trellomcp_core::ids::extract_board_id;
use trellomcp_core::params::{ListCreate, Position};

use super::{parse_args, text_result, tool_error, JsonRpcError, Tool};
use crate::prelude::{eprintln, *};
use crate::trello::TrelloClient;

pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_board_lists".to_string(),
            description: "Get all lists on a Trello board, ordered by position ascending.".to_string(),
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
            name: "create_list".to_string(),
            description: "Create a new list on a Trello board.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "board_id": {
                        "type": "string",
                        "description": "Board ID, short link, or trello.com board URL"
                    },
                    "name": {
                        "type": "string",
                        "description": "Name of the new list"
                    },
                    "pos": {
                        "type": ["string", "number"],
                        "description": "Position of the list: top, bottom, or a positive number"
                    }
                },
                "required": ["board_id", "name"]
            }),
        },
        Tool {
            name: "archive_list".to_string(),
            description: "Archive (close) a Trello list. Archiving an already-archived list succeeds silently.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "list_id": {
                        "type": "string",
                        "description": "The ID of the list to archive"
                    }
                },
                "required": ["list_id"]
            }),
        },
    ]
}

pub async fn handle_get_board_lists(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetBoardListsArgs {
        board_id: String,
    }

    let args: GetBoardListsArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling get_board_lists: board_id={}", args.board_id);
    }

    let board_id = extract_board_id(&args.board_id).map_err(tool_error)?;
    let lists = client.get_board_lists(&board_id).await.map_err(tool_error)?;

    text_result(&lists)
}

pub async fn handle_create_list(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CreateListArgs {
        board_id: String,
        name: String,
        pos: Option<Position>,
    }

    let args: CreateListArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling create_list: board_id={}, name={}",
            args.board_id, args.name
        );
    }

    let board_id = extract_board_id(&args.board_id).map_err(tool_error)?;
    let list = client
        .create_list(
            &board_id,
            &ListCreate {
                name: args.name,
                pos: args.pos,
            },
        )
        .await
        .map_err(tool_error)?;

    text_result(&list)
}

pub async fn handle_archive_list(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ArchiveListArgs {
        list_id: String,
    }

    let args: ArchiveListArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling archive_list: list_id={}", args.list_id);
    }

    let list = client.archive_list(&args.list_id).await.map_err(tool_error)?;

    text_result(&list)
}
