//! Session lifecycle and track ownership.
//!
//! The session is the single owner of the caption/metadata track pair;
//! everything else reaches the tracks through it. Nothing here is
//! reentrant-safe: hosts that receive recognition batches concurrently
//! must serialize calls into one session.

use livecap_tracks::{Cue, MemoryTrackProvider, TextTrack, TrackKind, TrackMode, TrackProvider};

use crate::config::{CaptionConfig, SessionMode};
use crate::error::{CaptionError, Result};
use crate::retention::{prune_track, RetentionWindow};
use crate::transcript::{RecognitionResponse, TimeRange};
use crate::translator::translate;

struct TrackPair<T> {
    captions: T,
    metadata: T,
}

/// Turns recognition batches into cues on a caption track and a metadata
/// track, created lazily on the first [`start`](CaptionSession::start).
pub struct CaptionSession<P: TrackProvider = MemoryTrackProvider> {
    provider: P,
    config: CaptionConfig,
    started: bool,
    tracks: Option<TrackPair<P::Track>>,
}

impl CaptionSession<MemoryTrackProvider> {
    /// Session backed by in-memory tracks.
    pub fn in_memory(config: CaptionConfig) -> Result<Self> {
        Self::new(MemoryTrackProvider::default(), config)
    }
}

impl<P: TrackProvider> CaptionSession<P> {
    /// Validates `config` up front; a session never exists with a bad one.
    pub fn new(provider: P, config: CaptionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            provider,
            config,
            started: false,
            tracks: None,
        })
    }

    /// Ensure the track pair exists, hide both tracks, and mark the session
    /// started. Creating the tracks happens at most once per session, no
    /// matter how often this is called.
    pub fn start(&mut self) -> Result<()> {
        if self.tracks.is_none() {
            let captions = self.provider.create_track(
                TrackKind::Subtitles,
                &self.config.caption_label,
                Some(&self.config.language),
            )?;
            let metadata = self
                .provider
                .create_track(TrackKind::Metadata, "", None)?;
            self.tracks = Some(TrackPair { captions, metadata });
        }

        if let Some(tracks) = self.tracks.as_mut() {
            tracks.captions.set_mode(TrackMode::Hidden);
            tracks.metadata.set_mode(TrackMode::Hidden);
        }

        self.started = true;
        tracing::info!(mode = %self.config.mode, "caption session started");
        Ok(())
    }

    /// Drop every cue and hide both tracks. Calling this on a session that
    /// was never started does nothing.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }

        if let Some(tracks) = self.tracks.as_mut() {
            tracks.captions.clear();
            tracks.metadata.clear();
            tracks.captions.set_mode(TrackMode::Hidden);
            tracks.metadata.set_mode(TrackMode::Hidden);
        }

        self.started = false;
        tracing::info!("caption session stopped");
    }

    /// Translate one recognition batch and append the cues to the tracks,
    /// in emission order.
    ///
    /// `response` may be `None`, and its `results` may be absent; both are
    /// silent no-ops. Errors only when the session was never started or the
    /// confidence payload fails to serialize.
    pub fn process_batch(
        &mut self,
        response: Option<&RecognitionResponse>,
        range: TimeRange,
    ) -> Result<()> {
        if !self.started {
            return Err(CaptionError::NotStarted);
        }
        let tracks = self.tracks.as_mut().ok_or(CaptionError::NotStarted)?;

        let batch = translate(response, range, self.config.words_per_cue);

        for cue in &batch.confidence {
            let payload = serde_json::to_string(&cue.payload)?;
            tracks.metadata.add_cue(Cue::new(cue.start, cue.end, payload));
        }
        for cue in &batch.captions {
            tracks
                .captions
                .add_cue(Cue::new(cue.start, cue.end, cue.text.clone()));
        }

        tracing::info!(
            start = range.start,
            end = range.end,
            captions = batch.captions.len(),
            confidence = batch.confidence.len(),
            "translated and added cues for time range"
        );
        Ok(())
    }

    /// Report the current playback position.
    ///
    /// In live mode this sweeps both tracks for cues that left the
    /// retention window; in VOD mode it does nothing.
    pub fn update_playhead(&mut self, position: f64) {
        if self.config.mode != SessionMode::Live {
            return;
        }
        let Some(tracks) = self.tracks.as_mut() else {
            return;
        };

        let window = RetentionWindow {
            behind: self.config.behind_playhead_limit,
            ahead: self.config.ahead_playhead_limit,
        };
        let evicted = prune_track(&mut tracks.captions, position, window)
            + prune_track(&mut tracks.metadata, position, window);
        if evicted > 0 {
            tracing::debug!(position, evicted, "pruned cues outside retention window");
        }
    }

    /// Toggle caption visibility for hosts that render captions natively.
    /// Does nothing before the first `start()`.
    pub fn set_caption_mode(&mut self, mode: TrackMode) {
        if let Some(tracks) = self.tracks.as_mut() {
            tracks.captions.set_mode(mode);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn config(&self) -> &CaptionConfig {
        &self.config
    }

    /// The caption track, once `start()` has created it.
    pub fn caption_track(&self) -> Option<&P::Track> {
        self.tracks.as_ref().map(|t| &t.captions)
    }

    /// The metadata track, once `start()` has created it.
    pub fn metadata_track(&self) -> Option<&P::Track> {
        self.tracks.as_ref().map(|t| &t.metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{SpeechAlternative, SpeechResult, StructuredTime, WordInfo};

    fn live_session() -> CaptionSession {
        CaptionSession::in_memory(CaptionConfig::default()).unwrap()
    }

    fn one_word_response() -> RecognitionResponse {
        RecognitionResponse {
            results: Some(vec![SpeechResult {
                alternatives: vec![SpeechAlternative {
                    transcript: None,
                    confidence: 0.9,
                    words: vec![WordInfo {
                        start_time: Some(StructuredTime::default()),
                        end_time: Some(StructuredTime {
                            seconds: 1,
                            nanos: 0,
                        }),
                        word: "hello".to_string(),
                    }],
                }],
            }]),
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let config = CaptionConfig {
            words_per_cue: 0,
            ..CaptionConfig::default()
        };
        assert!(matches!(
            CaptionSession::in_memory(config),
            Err(CaptionError::Config(_))
        ));
    }

    #[test]
    fn test_start_creates_the_track_pair_once() {
        let mut session = live_session();
        session.start().unwrap();
        session.start().unwrap();

        let captions = session.caption_track().unwrap();
        assert_eq!(captions.kind(), TrackKind::Subtitles);
        assert_eq!(captions.label(), "English (auto-generated)");
        assert_eq!(captions.language(), Some("en"));
        assert_eq!(captions.mode(), TrackMode::Hidden);

        let metadata = session.metadata_track().unwrap();
        assert_eq!(metadata.kind(), TrackKind::Metadata);
        assert_eq!(metadata.mode(), TrackMode::Hidden);
    }

    #[test]
    fn test_restart_reuses_tracks_and_keeps_cues() {
        let mut session = live_session();
        session.start().unwrap();
        session
            .process_batch(Some(&one_word_response()), TimeRange::new(0.0, 2.0))
            .unwrap();
        assert_eq!(session.caption_track().unwrap().cue_count(), 1);

        // start() again mid-session must not wipe anything
        session.start().unwrap();
        assert_eq!(session.caption_track().unwrap().cue_count(), 1);
    }

    #[test]
    fn test_stop_before_start_is_a_noop() {
        let mut session = live_session();
        session.stop();
        assert!(!session.is_started());
        assert!(session.caption_track().is_none());
    }

    #[test]
    fn test_stop_clears_cues_and_resets_modes() {
        let mut session = live_session();
        session.start().unwrap();
        session
            .process_batch(Some(&one_word_response()), TimeRange::new(0.0, 2.0))
            .unwrap();

        session.stop();
        assert!(!session.is_started());

        let captions = session.caption_track().unwrap();
        assert!(captions.is_empty());
        assert_eq!(captions.mode(), TrackMode::Hidden);
        let metadata = session.metadata_track().unwrap();
        assert!(metadata.is_empty());
        assert_eq!(metadata.mode(), TrackMode::Hidden);
    }

    #[test]
    fn test_caption_mode_toggle_and_stop_reset() {
        let mut session = live_session();
        session.set_caption_mode(TrackMode::Showing); // before start: no-op
        session.start().unwrap();

        session.set_caption_mode(TrackMode::Showing);
        assert_eq!(session.caption_track().unwrap().mode(), TrackMode::Showing);

        session.stop();
        assert_eq!(session.caption_track().unwrap().mode(), TrackMode::Hidden);
    }

    #[test]
    fn test_process_batch_before_start_errors() {
        let mut session = live_session();
        let err = session
            .process_batch(Some(&one_word_response()), TimeRange::new(0.0, 2.0))
            .unwrap_err();
        assert!(matches!(err, CaptionError::NotStarted));
    }

    #[test]
    fn test_process_batch_appends_to_both_tracks() {
        let mut session = live_session();
        session.start().unwrap();
        session
            .process_batch(Some(&one_word_response()), TimeRange::new(10.0, 12.0))
            .unwrap();

        let captions = session.caption_track().unwrap();
        let cue = captions.cues().next().unwrap();
        assert_eq!(cue.content, "hello");
        assert_eq!(cue.start, 10.0);
        assert_eq!(cue.end, 11.0);

        let metadata = session.metadata_track().unwrap();
        let payload: serde_json::Value =
            serde_json::from_str(&metadata.cues().next().unwrap().content).unwrap();
        assert_eq!(payload["confidence"], 0.9);
        assert_eq!(payload["range"]["start"], 10.0);
        assert_eq!(payload["range"]["end"], 12.0);
    }

    #[test]
    fn test_process_batch_with_none_response_is_silent() {
        let mut session = live_session();
        session.start().unwrap();
        session.process_batch(None, TimeRange::new(0.0, 2.0)).unwrap();
        assert!(session.caption_track().unwrap().is_empty());
        assert!(session.metadata_track().unwrap().is_empty());
    }

    #[test]
    fn test_update_playhead_prunes_only_in_live_mode() {
        for (mode, expect_empty) in [(SessionMode::Live, true), (SessionMode::Vod, false)] {
            let config = CaptionConfig {
                mode,
                ..CaptionConfig::default()
            };
            let mut session = CaptionSession::in_memory(config).unwrap();
            session.start().unwrap();
            session
                .process_batch(Some(&one_word_response()), TimeRange::new(0.0, 2.0))
                .unwrap();

            // Far past the batch plus the 30 s behind limit.
            session.update_playhead(120.0);

            let captions = session.caption_track().unwrap();
            let metadata = session.metadata_track().unwrap();
            if expect_empty {
                assert!(captions.is_empty(), "live mode should have pruned");
                assert!(metadata.is_empty(), "live mode should have pruned");
            } else {
                assert_eq!(captions.cue_count(), 1, "vod mode must never prune");
                assert_eq!(metadata.cue_count(), 1, "vod mode must never prune");
            }
        }
    }

    #[test]
    fn test_update_playhead_before_start_is_harmless() {
        let mut session = live_session();
        session.update_playhead(42.0);
    }

    /// Provider that refuses metadata tracks, as a constrained surface might.
    struct SubtitlesOnlyProvider(MemoryTrackProvider);

    impl TrackProvider for SubtitlesOnlyProvider {
        type Track = livecap_tracks::MemoryTrack;

        fn create_track(
            &mut self,
            kind: TrackKind,
            label: &str,
            language: Option<&str>,
        ) -> livecap_tracks::Result<Self::Track> {
            if kind != TrackKind::Subtitles {
                return Err(livecap_tracks::TrackError::UnsupportedKind(kind));
            }
            self.0.create_track(kind, label, language)
        }
    }

    #[test]
    fn test_provider_failure_propagates_from_start() {
        let provider = SubtitlesOnlyProvider(MemoryTrackProvider);
        let mut session = CaptionSession::new(provider, CaptionConfig::default()).unwrap();
        let err = session.start().unwrap_err();
        assert!(matches!(err, CaptionError::Track(_)));
        assert!(!session.is_started());
    }
}
