use reqwest::Method;
use trellomcp_core::params::{archive_list_query, ListCreate};
use trellomcp_core::types::List;

use super::{res, TrelloClient};
use crate::prelude::*;

impl TrelloClient {
    /// Lists on a board, remote position ascending.
    pub async fn get_board_lists(&self, board_id: &str) -> Result<Vec<List>, Error> {
        let path = f!("/boards/{}/lists", urlencoding::encode(board_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "get_board_lists",
            Some(res("board", board_id)),
        )
        .await
    }

    pub async fn get_list(&self, list_id: &str) -> Result<List, Error> {
        let path = f!("/lists/{}", urlencoding::encode(list_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "get_list",
            Some(res("list", list_id)),
        )
        .await
    }

    pub async fn create_list(&self, board_id: &str, params: &ListCreate) -> Result<List, Error> {
        let query = params.query()?;
        let path = f!("/boards/{}/lists", urlencoding::encode(board_id));
        self.fetch(
            Method::POST,
            &path,
            &query,
            "create_list",
            Some(res("board", board_id)),
        )
        .await
    }

    /// Sets the closed flag. Archiving an already-archived list succeeds
    /// silently; the request is the same either way.
    pub async fn archive_list(&self, list_id: &str) -> Result<List, Error> {
        let path = f!("/lists/{}/closed", urlencoding::encode(list_id));
        self.fetch(
            Method::PUT,
            &path,
            &archive_list_query(),
            "archive_list",
            Some(res("list", list_id)),
        )
        .await
    }
}
