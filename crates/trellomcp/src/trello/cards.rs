use reqwest::Method;
use trellomcp_core::params::{
    clear_due_query, due_complete_query, set_due_query, CardCreate, CardMove, CardUpdate,
};
use trellomcp_core::types::Card;

use super::{res, TrelloClient};
use crate::prelude::*;

impl TrelloClient {
    /// Cards in a list, remote position ascending.
    pub async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>, Error> {
        let path = f!("/lists/{}/cards", urlencoding::encode(list_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "list_cards",
            Some(res("list", list_id)),
        )
        .await
    }

    pub async fn get_card(&self, card_id: &str) -> Result<Card, Error> {
        let path = f!("/cards/{}", urlencoding::encode(card_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "get_card",
            Some(res("card", card_id)),
        )
        .await
    }

    pub async fn create_card(&self, params: &CardCreate) -> Result<Card, Error> {
        let query = params.query()?;
        self.fetch(
            Method::POST,
            "/cards",
            &query,
            "create_card",
            Some(res("list", &params.id_list)),
        )
        .await
    }

    /// Partial update: only the supplied fields change remotely; everything
    /// else keeps its current value.
    pub async fn update_card(&self, card_id: &str, params: &CardUpdate) -> Result<Card, Error> {
        if params.is_empty() {
            return Err(Error::validation(
                "update_card: at least one of name, desc, list id, due, or due complete is required",
            ));
        }

        let query = params.query()?;
        let path = f!("/cards/{}", urlencoding::encode(card_id));
        self.fetch(
            Method::PUT,
            &path,
            &query,
            "update_card",
            Some(res("card", card_id)),
        )
        .await
    }

    pub async fn delete_card(&self, card_id: &str) -> Result<serde_json::Value, Error> {
        let path = f!("/cards/{}", urlencoding::encode(card_id));
        self.request(
            Method::DELETE,
            &path,
            &[],
            "delete_card",
            Some(res("card", card_id)),
        )
        .await
    }

    /// Update restricted to destination list and position.
    pub async fn move_card(&self, card_id: &str, params: &CardMove) -> Result<Card, Error> {
        let query = params.query()?;
        let path = f!("/cards/{}", urlencoding::encode(card_id));
        self.fetch(
            Method::PUT,
            &path,
            &query,
            "move_card",
            Some(res("card", card_id)),
        )
        .await
    }

    pub async fn set_card_due_date(&self, card_id: &str, due: &str) -> Result<Card, Error> {
        let query = set_due_query(due)?;
        let path = f!("/cards/{}", urlencoding::encode(card_id));
        self.fetch(
            Method::PUT,
            &path,
            &query,
            "set_card_due_date",
            Some(res("card", card_id)),
        )
        .await
    }

    pub async fn mark_due_date_complete(
        &self,
        card_id: &str,
        complete: bool,
    ) -> Result<Card, Error> {
        let path = f!("/cards/{}", urlencoding::encode(card_id));
        self.fetch(
            Method::PUT,
            &path,
            &due_complete_query(complete),
            "mark_due_date_complete",
            Some(res("card", card_id)),
        )
        .await
    }

    pub async fn clear_card_due_date(&self, card_id: &str) -> Result<Card, Error> {
        let path = f!("/cards/{}", urlencoding::encode(card_id));
        self.fetch(
            Method::PUT,
            &path,
            &clear_due_query(),
            "clear_card_due_date",
            Some(res("card", card_id)),
        )
        .await
    }
}
