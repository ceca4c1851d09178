//! Error taxonomy shared by the client, the CLI, and the MCP server.

/// Every failure mode the adapter can surface to a caller.
///
/// Each remote-call variant carries the operation name (and the resource
/// involved, where there is one) so messages are readable without extra
/// context from the call site.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Missing or blank credentials at process start. Fatal to the process,
    /// never produced per-call.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied input rejected before any remote call was made.
    #[error("validation error: {0}")]
    Validation(String),

    /// Trello rejected the credentials (HTTP 401/403).
    #[error("{operation}: invalid Trello API credentials")]
    Auth { operation: String },

    /// The referenced board/list/card does not exist (HTTP 404).
    #[error("{operation}: {resource} not found")]
    NotFound { operation: String, resource: String },

    /// Trello is throttling (HTTP 429). The caller backs off; the adapter
    /// never retries on its own.
    #[error("{operation}: Trello API rate limit exceeded")]
    RateLimit { operation: String },

    /// Network-level failure: timeout, DNS, connection reset.
    #[error("{operation}: network error: {message}")]
    Transport { operation: String, message: String },

    /// The response body could not be parsed into the expected shape.
    #[error("{operation}: unexpected response from Trello: {message}")]
    Protocol { operation: String, message: String },

    /// Any other non-success HTTP status.
    #[error("{operation}: Trello API error: HTTP {status}")]
    Api { operation: String, status: u16 },
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn transport(operation: &str, message: impl std::fmt::Display) -> Self {
        Self::Transport {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    pub fn protocol(operation: &str, message: impl std::fmt::Display) -> Self {
        Self::Protocol {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    /// Stable machine-readable tag for the variant, used by the MCP server
    /// to annotate JSON-RPC errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Validation(_) => "validation",
            Self::Auth { .. } => "auth",
            Self::NotFound { .. } => "not_found",
            Self::RateLimit { .. } => "rate_limit",
            Self::Transport { .. } => "transport",
            Self::Protocol { .. } => "protocol",
            Self::Api { .. } => "api",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_operation_context() {
        let err = Error::NotFound {
            operation: "get_card".to_string(),
            resource: "card abc123".to_string(),
        };
        assert_eq!(err.to_string(), "get_card: card abc123 not found");

        let err = Error::Transport {
            operation: "list_boards".to_string(),
            message: "connection reset".to_string(),
        };
        assert!(err.to_string().contains("list_boards"));
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_kind_tags_are_distinct() {
        let errors = vec![
            Error::Configuration("x".into()),
            Error::Validation("x".into()),
            Error::Auth {
                operation: "op".into(),
            },
            Error::NotFound {
                operation: "op".into(),
                resource: "r".into(),
            },
            Error::RateLimit {
                operation: "op".into(),
            },
            Error::Transport {
                operation: "op".into(),
                message: "m".into(),
            },
            Error::Protocol {
                operation: "op".into(),
                message: "m".into(),
            },
            Error::Api {
                operation: "op".into(),
                status: 500,
            },
        ];

        let kinds: std::collections::HashSet<_> = errors.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds.len(), errors.len());
    }
}
