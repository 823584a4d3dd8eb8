//! Data retrieval error types

/// Errors produced by a data source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Network error during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid URL configured.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Error raised by a custom source.
    #[error("{0}")]
    Custom(String),
}

impl SourceError {
    /// Creates a new HTTP error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates an error for a custom source.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failed to turn a source payload into a result set.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Payload is not valid JSON, or does not have the result set shape.
    #[error("Response parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised by a custom parser.
    #[error("Response parse error: {message}")]
    Custom {
        /// Description of the parse error.
        message: String,
        /// Raw payload, if available.
        body: Option<String>,
    },
}

impl ParseError {
    /// Creates a new parse error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
            body: None,
        }
    }

    /// Creates a new parse error with the raw payload.
    pub fn custom_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
            body: Some(body.into()),
        }
    }
}
