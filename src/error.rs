// Error types for the surge application.
// Covers listing fetch errors, summary service errors, and cache errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurgeError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("summary service authentication failed: invalid or expired API key")]
    Unauthorized,

    #[error("summary service rate limit exceeded")]
    RateLimited,

    #[error("summary service error: {0}")]
    Service(String),

    #[error("cache parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing GROQ_API_KEY environment variable")]
    MissingApiKey,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SurgeError>;
