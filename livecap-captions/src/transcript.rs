//! Wire types for the upstream recognition service.
//!
//! The JSON shape is the recognition service's contract and is treated as
//! fixed. Field names follow the service's snake_case serializer, with
//! camelCase aliases accepted because the serializer changed casing across
//! releases. Every field is optional on the wire; absent fields decode to
//! their zero values rather than failing.

use serde::{Deserialize, Serialize};

/// Engine-native duration split into whole seconds and nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredTime {
    #[serde(default)]
    pub seconds: i64,
    #[serde(default)]
    pub nanos: i32,
}

impl StructuredTime {
    /// Collapse to floating-point seconds.
    ///
    /// The two-step division (by 1e6, then by 1e3) matches the engine's own
    /// nanosecond scaling; keep this form so results stay bit-for-bit
    /// comparable with the service's output.
    pub fn as_secs_f64(&self) -> f64 {
        let mut result = 0.0;
        if self.seconds != 0 {
            result = self.seconds as f64;
        }
        if self.nanos != 0 {
            result += (self.nanos as f64 / 1_000_000.0) / 1000.0;
        }
        result
    }
}

/// One recognized word with engine-native offsets relative to its batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordInfo {
    #[serde(default, alias = "startTime")]
    pub start_time: Option<StructuredTime>,
    #[serde(default, alias = "endTime")]
    pub end_time: Option<StructuredTime>,
    #[serde(default)]
    pub word: String,
}

/// One hypothesis for a stretch of speech.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechAlternative {
    /// Full hypothesis text. Unused by the translator, which works from the
    /// word timings, but part of the wire contract.
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub words: Vec<WordInfo>,
}

/// Hypotheses for one consecutive stretch of audio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechResult {
    #[serde(default)]
    pub alternatives: Vec<SpeechAlternative>,
}

/// Top-level response for one recognition batch.
///
/// `results` is absent when the service recognized nothing in the batch;
/// that is a valid no-op input, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResponse {
    #[serde(default)]
    pub results: Option<Vec<SpeechResult>>,
}

/// Timeline span one recognition batch covers, in seconds.
///
/// Word offsets in the batch are relative to `start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
