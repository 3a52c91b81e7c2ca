//! In-memory track implementation.

use crate::cue::{Cue, CueId};
use crate::error::Result;
use crate::track::{TextTrack, TrackKind, TrackMode, TrackProvider};

struct Entry {
    id: CueId,
    cue: Cue,
}

/// Heap-backed track for hosts that render cues themselves, and for tests.
pub struct MemoryTrack {
    kind: TrackKind,
    label: String,
    language: Option<String>,
    mode: TrackMode,
    entries: Vec<Entry>,
    next_id: u64,
}

impl MemoryTrack {
    fn new(kind: TrackKind, label: &str, language: Option<&str>) -> Self {
        Self {
            kind,
            label: label.to_string(),
            language: language.map(str::to_string),
            // Freshly created tracks start hidden, like addTextTrack().
            mode: TrackMode::Hidden,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Cues in insertion order.
    pub fn cues(&self) -> impl Iterator<Item = &Cue> + '_ {
        self.entries.iter().map(|e| &e.cue)
    }

    /// `(id, cue)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (CueId, &Cue)> + '_ {
        self.entries.iter().map(|e| (e.id, &e.cue))
    }

    pub fn cue(&self, id: CueId) -> Option<&Cue> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.cue)
    }
}

impl TextTrack for MemoryTrack {
    fn kind(&self) -> TrackKind {
        self.kind
    }

    fn mode(&self) -> TrackMode {
        self.mode
    }

    fn set_mode(&mut self, mode: TrackMode) {
        self.mode = mode;
    }

    fn add_cue(&mut self, cue: Cue) -> CueId {
        let id = CueId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, cue });
        id
    }

    fn remove_cue(&mut self, id: CueId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < before
    }

    fn retain_cues(&mut self, keep: &mut dyn FnMut(&Cue) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| keep(&e.cue));
        before - self.entries.len()
    }

    fn clear(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(kind = %self.kind, removed = self.entries.len(), "cleared track");
        }
        self.entries.clear();
    }

    fn cue_count(&self) -> usize {
        self.entries.len()
    }
}

/// Provider backed by [`MemoryTrack`]s. Creation never fails.
#[derive(Debug, Default)]
pub struct MemoryTrackProvider;

impl TrackProvider for MemoryTrackProvider {
    type Track = MemoryTrack;

    fn create_track(
        &mut self,
        kind: TrackKind,
        label: &str,
        language: Option<&str>,
    ) -> Result<Self::Track> {
        tracing::debug!(%kind, label, "created in-memory track");
        Ok(MemoryTrack::new(kind, label, language))
    }
}
