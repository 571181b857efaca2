use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unexpected columns: {found}")]
    UnexpectedColumns { found: String },

    #[error("record file {} is unreadable ({reason}); refusing to overwrite it", .path.display())]
    Corrupt { path: PathBuf, reason: String },
}
