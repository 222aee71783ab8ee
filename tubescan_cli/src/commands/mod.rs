pub mod channel;
pub mod search;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Core library error: {0}")]
    Core(#[from] tubescan_core::SourceError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;

/// Spinner shown while network calls are in flight.
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    let bar = indicatif::ProgressBar::new_spinner();
    bar.set_message(message.to_string());
    bar.enable_steady_tick(std::time::Duration::from_millis(120));
    bar
}
