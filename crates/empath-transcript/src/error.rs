use thiserror::Error;

/// Errors that can occur while exporting a transcript.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("delivery error: {0}")]
    Delivery(#[from] std::io::Error),
}
