use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request could not be built, so nothing was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[source] reqwest::Error),

    #[error("Failed to read photo '{}': {source}", path.display())]
    PhotoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config: {0}")]
    ConfigRead(std::io::Error),

    #[error("Invalid config format: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Missing setting: {0}. Set it in the environment or in .env")]
    MissingSetting(&'static str),

    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),

    #[error("{0}")]
    Other(String),
}

impl ClientError {
    pub fn unexpected_body(msg: impl Into<String>) -> Self {
        Self::UnexpectedBody(msg.into())
    }
}
