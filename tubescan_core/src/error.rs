// src/error.rs

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream API error: {0}")]
    Api(String),

    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl SourceError {
    pub fn code_str(&self) -> &'static str {
        match self {
            SourceError::InvalidInput(_) => "invalid_input",
            SourceError::Authentication(_) => "auth_failed",
            SourceError::Api(_) | SourceError::HttpRequest(_) => "upstream_error",
            _ => "internal_error",
        }
    }
}
