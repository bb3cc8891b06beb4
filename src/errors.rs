use thiserror::Error;

/// Errors raised while talking to Spotify or the extremes service.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No access token available")]
    MissingCredential,
    #[error("API request failed: {status} {status_text}")]
    UpstreamRequestFailed { status: u16, status_text: String },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ApiError {
    /// HTTP status of a failed upstream call, if that is what went wrong.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UpstreamRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error("Cannot load environment: {0}")]
    Env(String),
}
