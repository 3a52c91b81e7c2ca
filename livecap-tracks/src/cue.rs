//! Timestamped cue content.

use serde::{Deserialize, Serialize};

/// Identifier a track assigns when a cue is added.
///
/// Unique within the issuing track for its whole lifetime; ids are never
/// reused after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CueId(pub(crate) u64);

impl std::fmt::Display for CueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cue#{}", self.0)
    }
}

/// A timestamped span of content attached to a media timeline.
///
/// `content` is either human-visible caption text or a serialized payload,
/// depending on the kind of track the cue lives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Timeline start in seconds.
    pub start: f64,
    /// Timeline end in seconds.
    pub end: f64,
    pub content: String,
}

impl Cue {
    pub fn new<S: Into<String>>(start: f64, end: f64, content: S) -> Self {
        Self {
            start,
            end,
            content: content.into(),
        }
    }

    /// Whether `position` falls inside this cue's span (inclusive on both ends).
    pub fn contains(&self, position: f64) -> bool {
        self.start <= position && position <= self.end
    }

    /// Span length in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
