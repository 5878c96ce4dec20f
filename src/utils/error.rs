use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned unexpected response status = {status} in page = {page}")]
    HttpStatus {
        status: reqwest::StatusCode,
        page: u32,
    },

    #[error("API returned inconsistent json in page = {page}")]
    MalformedPayload {
        page: u32,
        #[source]
        source: serde_json::Error,
    },

    #[error("API returned not ok response in page = {page}: {message}")]
    ApiRejected { page: u32, message: String },

    #[error("failing after all retries, attempts = {attempts}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<HarvestError>,
    },

    #[error("Work queue closed: {message}")]
    QueueClosed { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: field '{field}' has invalid value '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, HarvestError>;
