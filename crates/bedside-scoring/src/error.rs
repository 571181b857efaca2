use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),
}
