use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required field is missing or empty, or an input could not be parsed.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// A write would violate a uniqueness constraint.
    #[error("{0}")]
    DuplicateKey(String),

    /// Any other store failure; carries the kind of the underlying error.
    #[error("Server error: {0}")]
    ServerError(String),
}

impl CoreError {
    pub const MISSING_FIELDS: &'static str = "Bad request - All fields must be completed!";

    pub fn missing_fields() -> Self {
        Self::Validation(Self::MISSING_FIELDS.to_string())
    }

    /// Replaces the store-level detail of a duplicate key with a message meant for callers.
    pub fn on_duplicate(self, message: impl Into<String>) -> Self {
        match self {
            Self::DuplicateKey(_) => Self::DuplicateKey(message.into()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_duplicate_only_rewrites_duplicate_keys() {
        let duplicate = CoreError::DuplicateKey("clients_email_key".to_string());
        assert_eq!(
            duplicate.on_duplicate("Client with this email already exists!"),
            CoreError::DuplicateKey("Client with this email already exists!".to_string())
        );

        let server = CoreError::ServerError("QueryError".to_string());
        assert_eq!(server.clone().on_duplicate("ignored"), server);
    }

    #[test]
    fn server_error_display_includes_kind() {
        let err = CoreError::ServerError("ConnectionError".to_string());
        assert_eq!(err.to_string(), "Server error: ConnectionError");
    }
}
