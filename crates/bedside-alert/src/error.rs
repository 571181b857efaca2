use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("no contact channel configured")]
    NoContactChannel,

    #[error("invalid contact '{contact}': {source}")]
    InvalidContact {
        contact: String,
        source: url::ParseError,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
