//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CaptionError, Result};

/// Playback mode the session serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Continuous stream; retention pruning bounds cue memory.
    Live,
    /// Fixed-duration playback; every cue is kept so the viewer can seek
    /// back, at the cost of unbounded growth over long sessions.
    Vod,
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionMode::Live => write!(f, "live"),
            SessionMode::Vod => write!(f, "vod"),
        }
    }
}

/// Caption session configuration.
///
/// Every recognized option is an explicit field; unknown options cannot be
/// smuggled in. Validated once at session construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionConfig {
    pub mode: SessionMode,

    /// Seconds past the playhead a scheduled cue may sit before the live
    /// sweep evicts it.
    pub ahead_playhead_limit: f64,

    /// Seconds behind the playhead an elapsed cue may linger before the live
    /// sweep evicts it.
    pub behind_playhead_limit: f64,

    /// How many word timings are merged into one display cue. Word-level
    /// cues arrive with sub-second spans and would render one word at a
    /// time; merging amortizes the display churn.
    pub words_per_cue: usize,

    /// Label for the generated caption track.
    pub caption_label: String,

    /// BCP-47 language tag for the generated caption track.
    pub language: String,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            mode: SessionMode::Live,
            ahead_playhead_limit: 30.0,
            behind_playhead_limit: 30.0,
            words_per_cue: 10,
            caption_label: "English (auto-generated)".to_string(),
            language: "en".to_string(),
        }
    }
}

impl CaptionConfig {
    /// Check every field once; sessions refuse to construct on failure.
    pub fn validate(&self) -> Result<()> {
        if self.words_per_cue == 0 {
            return Err(CaptionError::config("words_per_cue must be at least 1"));
        }
        for (name, value) in [
            ("ahead_playhead_limit", self.ahead_playhead_limit),
            ("behind_playhead_limit", self.behind_playhead_limit),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CaptionError::config(format!(
                    "{name} must be a non-negative number of seconds, got {value}"
                )));
            }
        }
        Ok(())
    }
}
