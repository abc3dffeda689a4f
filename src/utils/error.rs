use thiserror::Error;

#[derive(Error, Debug)]
pub enum DopcError {
    #[error("venue API request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("venue API returned status {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("venue not found: {slug}")]
    VenueNotFound { slug: String },

    #[error("invalid venue data: {message}")]
    VenueData { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, DopcError>;
