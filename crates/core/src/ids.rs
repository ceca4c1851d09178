//! Identifier extraction.
//!
//! Boards and cards are addressed by id or short link, but users usually
//! have a `https://trello.com/b/...` or `https://trello.com/c/...` URL on
//! their clipboard; both are accepted everywhere an id is.

use regex::Regex;

use crate::error::Error;

fn extract(input: &str, url_pattern: &str, what: &str) -> Result<String, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{what} id must not be empty")));
    }

    let re = Regex::new(url_pattern).unwrap();
    if let Some(caps) = re.captures(trimmed) {
        return Ok(caps[1].to_string());
    }

    // Not a URL: treat the input as a raw id / short link.
    if trimmed.contains('/') {
        return Err(Error::validation(format!(
            "invalid {what} reference {trimmed:?}: expected an id or a trello.com URL"
        )));
    }

    Ok(trimmed.to_string())
}

/// Accepts a board id, a short link, or a full board URL.
pub fn extract_board_id(input: &str) -> Result<String, Error> {
    extract(input, r"trello\.com/b/([A-Za-z0-9]+)", "board")
}

/// Accepts a card id, a short link, or a full card URL.
pub fn extract_card_id(input: &str) -> Result<String, Error> {
    extract(input, r"trello\.com/c/([A-Za-z0-9]+)", "card")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ids_pass_through() {
        assert_eq!(extract_board_id("5f2b8b8b8b8b8b8b8b8b8b8b").unwrap(), "5f2b8b8b8b8b8b8b8b8b8b8b");
        assert_eq!(extract_card_id("aBcD1234").unwrap(), "aBcD1234");
    }

    #[test]
    fn test_board_url() {
        assert_eq!(
            extract_board_id("https://trello.com/b/aBcD1234/product-roadmap").unwrap(),
            "aBcD1234"
        );
    }

    #[test]
    fn test_card_url() {
        assert_eq!(
            extract_card_id("https://trello.com/c/xYz98765/42-ship-the-thing").unwrap(),
            "xYz98765"
        );
    }

    #[test]
    fn test_card_url_without_slug() {
        assert_eq!(extract_card_id("https://trello.com/c/xYz98765").unwrap(), "xYz98765");
    }

    #[test]
    fn test_rejects_empty_and_foreign_urls() {
        assert_eq!(extract_board_id("  ").unwrap_err().kind(), "validation");
        assert_eq!(
            extract_board_id("https://example.com/b/abc").unwrap_err().kind(),
            "validation"
        );
        // A card URL is not a board reference.
        assert_eq!(
            extract_board_id("https://trello.com/c/abc123").unwrap_err().kind(),
            "validation"
        );
    }
}
