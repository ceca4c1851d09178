//! Composite read views backing the MCP resources.
//!
//! Aggregation is fail-fast: if any constituent fetch fails, the whole view
//! fails with that error instead of returning partial data. Fetches run in
//! sequence; call volume is human-interactive.

use trellomcp_core::resource::{assemble_board_snapshot, BoardSnapshot, ListSnapshot};

use super::TrelloClient;
use crate::prelude::*;

impl TrelloClient {
    /// The board, its lists, and the cards of every list.
    pub async fn board_snapshot(&self, board_id: &str) -> Result<BoardSnapshot, Error> {
        let board = self.get_board(board_id).await?;
        let lists = self.get_board_lists(board_id).await?;

        let mut cards_per_list = Vec::with_capacity(lists.len());
        for list in &lists {
            cards_per_list.push(self.list_cards(&list.id).await?);
        }

        Ok(assemble_board_snapshot(board, lists, cards_per_list))
    }

    /// The list and its cards.
    pub async fn list_snapshot(&self, list_id: &str) -> Result<ListSnapshot, Error> {
        let list = self.get_list(list_id).await?;
        let cards = self.list_cards(list_id).await?;

        Ok(ListSnapshot { list, cards })
    }
}
