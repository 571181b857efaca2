use thiserror::Error;

use crate::validate::ValidationErrors;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid observation: {0}")]
    InvalidObservation(#[from] ValidationErrors),

    #[error("unrecognized {field} value: {value}")]
    UnknownChoice { field: String, value: String },
}
