//! Error types for track operations.

use thiserror::Error;

use crate::track::TrackKind;

pub type Result<T> = std::result::Result<T, TrackError>;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("track creation failed: {0}")]
    CreateFailed(String),

    #[error("track kind not supported by this provider: {0}")]
    UnsupportedKind(TrackKind),
}

impl TrackError {
    pub fn create_failed<S: Into<String>>(msg: S) -> Self {
        Self::CreateFailed(msg.into())
    }
}
