// src/config.rs

use crate::error::SourceError;

/// Credentials for the YouTube Data API, passed explicitly into
/// [`crate::youtube::YouTubeClient::new`]. There is no process-global client;
/// every component receives its configuration at construction.
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
}

impl YouTubeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        YouTubeConfig {
            api_key: api_key.into(),
        }
    }

    /// Reads `YOUTUBE_API_KEY` from the environment.
    pub fn from_env() -> Result<Self, SourceError> {
        std::env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(Self::new)
            .ok_or_else(|| SourceError::Authentication("YOUTUBE_API_KEY not set".to_string()))
    }
}
