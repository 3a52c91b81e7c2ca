//! Live caption translation for streaming speech recognition.
//!
//! Turns recognition batches (word-level timestamps plus confidence scores,
//! delivered per time range) into timed caption cues and machine-readable
//! confidence cues on a pair of text tracks. Heavy lifting lives in three
//! places: flattening recognition alternatives, merging word timings into
//! display-sized cues, and the live-mode retention sweep that keeps the cue
//! set bounded around the playhead.
//!
//! # Example
//!
//! ```no_run
//! use livecap_captions::{CaptionConfig, CaptionSession, RecognitionResponse, TimeRange};
//!
//! let mut session = CaptionSession::in_memory(CaptionConfig::default())?;
//! session.start()?;
//!
//! // One batch from the recognition service, covering 10 s - 12 s of the
//! // media timeline.
//! let json = r#"{"results": []}"#;
//! let response: RecognitionResponse = serde_json::from_str(json)?;
//! session.process_batch(Some(&response), TimeRange::new(10.0, 12.0))?;
//!
//! // Follow playback; live sessions prune cues that left the window.
//! session.update_playhead(11.0);
//!
//! session.stop();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod retention;
pub mod session;
pub mod transcript;
pub mod translator;

pub use config::{CaptionConfig, SessionMode};
pub use error::{CaptionError, Result};
pub use retention::RetentionWindow;
pub use session::CaptionSession;
pub use transcript::{
    RecognitionResponse, SpeechAlternative, SpeechResult, StructuredTime, TimeRange, WordInfo,
};
pub use translator::{CaptionCue, ConfidenceCue, ConfidencePayload, TranslatedBatch, WordTiming};
