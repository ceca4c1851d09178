use reqwest::Method;
use trellomcp_core::params::{set_card_labels_query, LabelCreate, LabelUpdate};
use trellomcp_core::types::{Card, Label};

use super::{res, TrelloClient};
use crate::prelude::*;

impl TrelloClient {
    pub async fn get_board_labels(&self, board_id: &str) -> Result<Vec<Label>, Error> {
        let path = f!("/boards/{}/labels", urlencoding::encode(board_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "get_board_labels",
            Some(res("board", board_id)),
        )
        .await
    }

    pub async fn create_label(&self, params: &LabelCreate) -> Result<Label, Error> {
        let query = params.query()?;
        self.fetch(
            Method::POST,
            "/labels",
            &query,
            "create_label",
            Some(res("board", &params.id_board)),
        )
        .await
    }

    pub async fn get_label(&self, label_id: &str) -> Result<Label, Error> {
        let path = f!("/labels/{}", urlencoding::encode(label_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "get_label",
            Some(res("label", label_id)),
        )
        .await
    }

    pub async fn update_label(&self, label_id: &str, params: &LabelUpdate) -> Result<Label, Error> {
        if params.is_empty() {
            return Err(Error::validation(
                "update_label: at least one of name or color is required",
            ));
        }

        let query = params.query()?;
        let path = f!("/labels/{}", urlencoding::encode(label_id));
        self.fetch(
            Method::PUT,
            &path,
            &query,
            "update_label",
            Some(res("label", label_id)),
        )
        .await
    }

    pub async fn delete_label(&self, label_id: &str) -> Result<serde_json::Value, Error> {
        let path = f!("/labels/{}", urlencoding::encode(label_id));
        self.request(
            Method::DELETE,
            &path,
            &[],
            "delete_label",
            Some(res("label", label_id)),
        )
        .await
    }

    pub async fn get_card_labels(&self, card_id: &str) -> Result<Vec<Label>, Error> {
        let path = f!("/cards/{}/labels", urlencoding::encode(card_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "get_card_labels",
            Some(res("card", card_id)),
        )
        .await
    }

    pub async fn add_label_to_card(
        &self,
        card_id: &str,
        label_id: &str,
    ) -> Result<serde_json::Value, Error> {
        let path = f!("/cards/{}/idLabels", urlencoding::encode(card_id));
        let query = vec![("value".to_string(), label_id.to_string())];
        self.request(
            Method::POST,
            &path,
            &query,
            "add_label_to_card",
            Some(res("card", card_id)),
        )
        .await
    }

    pub async fn remove_label_from_card(
        &self,
        card_id: &str,
        label_id: &str,
    ) -> Result<serde_json::Value, Error> {
        let path = f!(
            "/cards/{}/idLabels/{}",
            urlencoding::encode(card_id),
            urlencoding::encode(label_id)
        );
        self.request(
            Method::DELETE,
            &path,
            &[],
            "remove_label_from_card",
            Some(res("card", card_id)),
        )
        .await
    }

    /// Replaces the card's full label set.
    pub async fn set_card_labels(&self, card_id: &str, label_ids: &[String]) -> Result<Card, Error> {
        let query = set_card_labels_query(label_ids)?;
        let path = f!("/cards/{}", urlencoding::encode(card_id));
        self.fetch(
            Method::PUT,
            &path,
            &query,
            "set_card_labels",
            Some(res("card", card_id)),
        )
        .await
    }
}
