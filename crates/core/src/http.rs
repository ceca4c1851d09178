//! Normalization of Trello HTTP responses into the error taxonomy.

use crate::error::Error;

/// Map a non-success HTTP status to a typed error.
///
/// `resource` names the entity the request addressed (e.g. "board abc123")
/// and only matters for 404s; list endpoints pass `None`.
pub fn status_error(status: u16, operation: &str, resource: Option<&str>) -> Error {
    match status {
        401 | 403 => Error::Auth {
            operation: operation.to_string(),
        },
        404 => Error::NotFound {
            operation: operation.to_string(),
            resource: resource.unwrap_or("resource").to_string(),
        },
        429 => Error::RateLimit {
            operation: operation.to_string(),
        },
        status => Error::Api {
            operation: operation.to_string(),
            status,
        },
    }
}

/// Decode a successful response body.
///
/// Trello answers some idempotent mutations (archive, delete) with an empty
/// 2xx body; that is success, not a protocol violation, and decodes to JSON
/// null. Anything non-empty must parse as JSON.
pub fn parse_body(operation: &str, body: &str) -> Result<serde_json::Value, Error> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(serde_json::Value::Null);
    }

    serde_json::from_str(trimmed).map_err(|e| Error::protocol(operation, e))
}

/// Decode a JSON value into a typed entity, surfacing shape mismatches as
/// protocol errors.
pub fn decode<T: serde::de::DeserializeOwned>(
    operation: &str,
    value: serde_json::Value,
) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|e| Error::protocol(operation, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_auth() {
        assert_eq!(status_error(401, "list_boards", None).kind(), "auth");
        assert_eq!(status_error(403, "list_boards", None).kind(), "auth");
    }

    #[test]
    fn test_status_error_not_found_names_resource() {
        let err = status_error(404, "get_board", Some("board abc123"));
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.to_string(), "get_board: board abc123 not found");
    }

    #[test]
    fn test_status_error_not_found_distinct_from_transport() {
        let not_found = status_error(404, "get_card", Some("card x"));
        let transport = Error::transport("get_card", "timed out");
        assert_ne!(not_found.kind(), transport.kind());
    }

    #[test]
    fn test_status_error_rate_limit() {
        assert_eq!(status_error(429, "create_card", None).kind(), "rate_limit");
    }

    #[test]
    fn test_status_error_other_statuses_keep_code() {
        let err = status_error(503, "get_board", Some("board x"));
        assert_eq!(err.kind(), "api");
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_parse_body_empty_is_success() {
        assert_eq!(
            parse_body("archive_list", "").unwrap(),
            serde_json::Value::Null
        );
        assert_eq!(
            parse_body("delete_card", "  \n").unwrap(),
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_parse_body_json() {
        let value = parse_body("get_card", r#"{"id":"c1","name":"Task"}"#).unwrap();
        assert_eq!(value["id"], "c1");
    }

    #[test]
    fn test_parse_body_garbage_is_protocol_error() {
        let err = parse_body("get_card", "<html>502</html>").unwrap_err();
        assert_eq!(err.kind(), "protocol");
    }

    #[test]
    fn test_decode_shape_mismatch_is_protocol_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Needy {
            #[allow(dead_code)]
            id: String,
        }

        let err = decode::<Needy>("get_board", serde_json::json!({"name": "no id"})).unwrap_err();
        assert_eq!(err.kind(), "protocol");
    }
}
