//! Error types for the scalptrack client.

use thiserror::Error;

/// A shared error type for the entire scalptrack client.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum ScalptrackError {
    /// Transport-level failure (timeout, connection refused, DNS).
    ///
    /// A request timeout is indistinguishable from a network error at this
    /// level; both end up here.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The server rejected the request with 401. The stored bearer
    /// credential has already been cleared by the gateway when this is
    /// returned from an API call.
    #[error("Unauthorized")]
    Unauthorized,

    /// A 4xx response that carried a user-facing message body.
    #[error("{0}")]
    Validation(String),

    /// Any other non-2xx response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Credential/config storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScalptrackError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an Api error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a transport-level error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a 401
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this is a validation error with a user-facing message
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the message to show the user for this error.
    ///
    /// Validation messages are shown verbatim; everything else collapses to
    /// a generic retry-suggesting line so that transport details never leak
    /// into the UI.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<reqwest::Error> for ScalptrackError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            return Self::Transport {
                message: err.to_string(),
            };
        }
        match err.status() {
            Some(status) if status.as_u16() == 401 => Self::Unauthorized,
            Some(status) => Self::Api {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => Self::Transport {
                message: err.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for ScalptrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ScalptrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ScalptrackError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ScalptrackError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ScalptrackError>`.
pub type Result<T> = std::result::Result<T, ScalptrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_validation_verbatim() {
        let err = ScalptrackError::validation("Email already registered");
        assert_eq!(
            err.user_message("Something went wrong"),
            "Email already registered"
        );
    }

    #[test]
    fn test_user_message_transport_falls_back() {
        let err = ScalptrackError::transport("connection refused");
        assert_eq!(
            err.user_message("Please try again."),
            "Please try again."
        );
    }

    #[test]
    fn test_predicates() {
        assert!(ScalptrackError::Unauthorized.is_unauthorized());
        assert!(ScalptrackError::transport("x").is_transport());
        assert!(!ScalptrackError::validation("x").is_transport());
    }
}
