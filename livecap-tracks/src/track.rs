//! Track capability traits and the kinds/modes a media surface understands.

use serde::{Deserialize, Serialize};

use crate::cue::{Cue, CueId};
use crate::error::Result;

/// Standard text-track kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Subtitles,
    Captions,
    Descriptions,
    Chapters,
    Metadata,
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackKind::Subtitles => write!(f, "subtitles"),
            TrackKind::Captions => write!(f, "captions"),
            TrackKind::Descriptions => write!(f, "descriptions"),
            TrackKind::Chapters => write!(f, "chapters"),
            TrackKind::Metadata => write!(f, "metadata"),
        }
    }
}

/// Display mode of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackMode {
    /// Cues are ignored entirely.
    Disabled,
    /// Cues are tracked but not rendered.
    Hidden,
    /// Cues are rendered to the viewer.
    Showing,
}

/// An ordered, mutable collection of cues on a media timeline.
///
/// Insertion order is the only ordering guarantee; callers wanting strict
/// timestamp order must add cues in timestamp order.
pub trait TextTrack {
    fn kind(&self) -> TrackKind;

    fn mode(&self) -> TrackMode;

    fn set_mode(&mut self, mode: TrackMode);

    /// Append a cue, returning the id it is addressable by.
    fn add_cue(&mut self, cue: Cue) -> CueId;

    /// Remove the cue with `id`. Returns false when no such cue exists.
    fn remove_cue(&mut self, id: CueId) -> bool;

    /// Remove every cue for which `keep` returns false, in one pass.
    /// Returns the number of cues removed.
    fn retain_cues(&mut self, keep: &mut dyn FnMut(&Cue) -> bool) -> usize;

    /// Remove every cue.
    fn clear(&mut self);

    fn cue_count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.cue_count() == 0
    }
}

/// Hands out tracks to a caption session.
///
/// This is the seam to the hosting media surface; the session depends only
/// on this capability set, not on any particular surface.
pub trait TrackProvider {
    type Track: TextTrack;

    fn create_track(
        &mut self,
        kind: TrackKind,
        label: &str,
        language: Option<&str>,
    ) -> Result<Self::Track>;
}
