use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("No provider identifier found in URL: {0}")]
    MissingIdentifier(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: status {status}")]
    Http { status: u16, body: String },

    #[error("Failed to parse provider response: {0}")]
    JsonParse(String),

    #[error("Provider response missing expected data: {0}")]
    MissingItem(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Failed to evaluate resource")]
    EvaluationFailed,
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
