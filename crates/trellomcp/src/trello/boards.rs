use reqwest::Method;
use trellomcp_core::params::BoardCreate;
use trellomcp_core::types::Board;

use super::{res, TrelloClient};
use crate::prelude::*;

impl TrelloClient {
    /// All boards visible to the authenticated member, remote default order.
    pub async fn list_boards(&self) -> Result<Vec<Board>, Error> {
        self.fetch(Method::GET, "/members/me/boards", &[], "list_boards", None)
            .await
    }

    pub async fn get_board(&self, board_id: &str) -> Result<Board, Error> {
        let path = f!("/boards/{}", urlencoding::encode(board_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "get_board",
            Some(res("board", board_id)),
        )
        .await
    }

    pub async fn create_board(&self, params: &BoardCreate) -> Result<Board, Error> {
        let query = params.query()?;
        self.fetch(Method::POST, "/boards/", &query, "create_board", None)
            .await
    }
}
