//! Error types for caption translation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CaptionError>;

#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("session not started")]
    NotStarted,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("track error: {0}")]
    Track(#[from] livecap_tracks::TrackError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CaptionError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
