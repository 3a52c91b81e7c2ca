//! Text-track model for timeline-attached cues.
//!
//! This crate provides the track side of live captioning: timestamped cues,
//! the track kinds and display modes a media surface understands, and the
//! [`TrackProvider`] seam through which a host hands out tracks. A ready
//! in-memory implementation ([`MemoryTrackProvider`]) backs tests and hosts
//! that render cues themselves.
//!
//! # Example
//!
//! ```
//! use livecap_tracks::{Cue, MemoryTrackProvider, TextTrack, TrackKind, TrackMode, TrackProvider};
//!
//! let mut provider = MemoryTrackProvider::default();
//! let mut track = provider.create_track(TrackKind::Subtitles, "English", Some("en"))?;
//!
//! let id = track.add_cue(Cue::new(1.0, 2.5, "hello world"));
//! track.set_mode(TrackMode::Showing);
//!
//! assert_eq!(track.cue_count(), 1);
//! assert!(track.remove_cue(id));
//! # Ok::<(), livecap_tracks::TrackError>(())
//! ```

mod cue;
mod error;
mod memory;
mod track;

pub use cue::{Cue, CueId};
pub use error::{Result, TrackError};
pub use memory::{MemoryTrack, MemoryTrackProvider};
pub use track::{TextTrack, TrackKind, TrackMode, TrackProvider};
