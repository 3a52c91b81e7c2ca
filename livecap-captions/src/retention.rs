//! Sliding-window cue retention around the playhead.
//!
//! Live streams accumulate cues forever; the sweep below keeps the track
//! bounded to a window around the current playback position. Sessions in
//! VOD mode never call it.

use livecap_tracks::TextTrack;

/// Seconds kept on either side of the playhead.
#[derive(Debug, Clone, Copy)]
pub struct RetentionWindow {
    pub behind: f64,
    pub ahead: f64,
}

/// Evict every cue that fell out of `position ± window` from `track`,
/// in one pass. Returns the number of cues evicted.
///
/// A cue intersecting the playhead always survives, whatever the limits.
/// Eviction is monotonic; nothing here reinserts.
pub fn prune_track<T: TextTrack>(track: &mut T, position: f64, window: RetentionWindow) -> usize {
    let floor = position - window.behind;
    let ceiling = position + window.ahead;

    track.retain_cues(&mut |cue| {
        if cue.contains(position) {
            return true;
        }
        cue.end >= floor && cue.start <= ceiling
    })
}
