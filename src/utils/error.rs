use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Market request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Market service returned {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },

    #[error("Failed to decode response from {context}: {reason}")]
    Decode { context: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Token provider failed: {message}")]
    Token { message: String },
}

impl MarketError {
    /// Transient failures (timeout, connection refused) are worth another
    /// attempt. Anything that already reached the server and came back with
    /// a status is terminal for the invocation.
    pub fn is_transient(&self) -> bool {
        match self {
            MarketError::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// HTTP status associated with the failure, if the call got that far.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            MarketError::Status { status, .. } => Some(*status),
            MarketError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MarketError>;
