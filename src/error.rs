//! Error types for the labeling app

use thiserror::Error;

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, LabelerError>;

#[derive(Error, Debug)]
pub enum LabelerError {
    /// The label store could not be opened, created, read or written
    #[error("Persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// The embedded dataset is structurally invalid
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// The embedded dataset is not valid JSON
    #[error("Dataset format error: {0}")]
    DatasetFormat(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The window or renderer failed to start
    #[error("UI error: {0}")]
    Ui(#[from] iced::Error),
}
