use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No line item matching '{0}' found in the statement")]
    AnchorNotFound(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "gemini")]
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[cfg(feature = "gemini")]
    #[error("Commentary generation failed: {0}")]
    CommentaryFailed(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
