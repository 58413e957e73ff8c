//! Domain errors
//!
//! Callers only ever distinguish "the remote call failed". The variants of
//! [`GatewayError`] keep the cause around for logs.

use thiserror::Error;

/// Common result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("remote call failed: transport error: {0}")]
    Transport(String),

    #[error("remote call failed: HTTP status {status}")]
    Status { status: u16 },

    #[error("remote call failed: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("remote call failed: could not decode response: {0}")]
    Decode(String),

    #[error("remote call failed: response had no data for '{field}'")]
    MissingData { field: &'static str },
}

impl GatewayError {
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::Transport(_) => "gateway.transport",
            GatewayError::Status { .. } => "gateway.status",
            GatewayError::GraphQl { .. } => "gateway.graphql",
            GatewayError::Decode(_) => "gateway.decode",
            GatewayError::MissingData { .. } => "gateway.missing_data",
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("GraphQL endpoint must be an http(s) URL, got '{0}'")]
    InvalidEndpoint(String),

    #[error("authentication type API_KEY requires aws_appsync_apiKey")]
    MissingApiKey,

    #[error("authentication type AMAZON_COGNITO_USER_POOLS requires aws_user_pools_web_client_id")]
    MissingClientId,

    #[error("poll interval must be at least one second")]
    ZeroPollInterval,

    #[error("poll interval of {secs} seconds exceeds the maximum of {max} seconds")]
    PollIntervalTooLong { secs: u64, max: u64 },
}
