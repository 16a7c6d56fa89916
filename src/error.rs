use thiserror::Error;

#[derive(Error, Debug)]
pub enum IyzipayError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
    #[error("Gateway rejected request [{code}]: {message}")]
    Rejected {
        code: String,
        message: String,
        group: Option<String>,
        conversation_id: Option<String>,
    },
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, IyzipayError>;
