//! Transcript-to-cue translation.
//!
//! Flattens the alternatives of a recognition response, places each word on
//! the media timeline, and merges fixed-size word groups into display cues.
//! Pure transformation; appending the output to tracks is the session's job.

use serde::Serialize;

use crate::transcript::{RecognitionResponse, TimeRange, WordInfo};

/// A single word placed on the media timeline.
///
/// Derived from a [`WordInfo`] plus the batch range's base offset, never
/// received directly.
#[derive(Debug, Clone, PartialEq)]
pub struct WordTiming {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl WordTiming {
    fn place(word: &WordInfo, base: f64) -> Self {
        let start = base + word.start_time.unwrap_or_default().as_secs_f64();
        let end = base + word.end_time.unwrap_or_default().as_secs_f64();
        Self {
            start,
            end,
            text: word.word.clone(),
        }
    }
}

/// Merged display cue covering one word group.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionCue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Machine-readable confidence annotation for one alternative.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceCue {
    pub start: f64,
    pub end: f64,
    pub payload: ConfidencePayload,
}

/// Payload a confidence cue carries, serialized to JSON on the metadata
/// track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidencePayload {
    pub confidence: f32,
    pub range: TimeRange,
}

/// Everything translated out of one recognition batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslatedBatch {
    pub captions: Vec<CaptionCue>,
    pub confidence: Vec<ConfidenceCue>,
}

impl TranslatedBatch {
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty() && self.confidence.is_empty()
    }
}

/// Partition `words` into groups of at most `words_per_cue`, front to back.
///
/// The final group holds the remainder. Order is preserved and concatenating
/// the groups reproduces the input. Empty input yields no groups, never an
/// empty group. `words_per_cue` of zero also yields no groups; validated
/// configs never pass it.
pub fn group_words(words: &[WordTiming], words_per_cue: usize) -> Vec<&[WordTiming]> {
    if words_per_cue == 0 {
        return Vec::new();
    }
    words.chunks(words_per_cue).collect()
}

/// Translate one recognition batch into caption and confidence cues.
///
/// A `None` response, or one without `results`, translates to an empty
/// batch; silence is not an error. Alternatives are flattened in
/// result-then-alternative order, and each alternative contributes one
/// confidence cue spanning the full `range` plus one caption cue per word
/// group.
pub fn translate(
    response: Option<&RecognitionResponse>,
    range: TimeRange,
    words_per_cue: usize,
) -> TranslatedBatch {
    let mut batch = TranslatedBatch::default();

    let results = match response.and_then(|r| r.results.as_ref()) {
        Some(results) => results,
        None => return batch,
    };

    for alternative in results.iter().flat_map(|r| r.alternatives.iter()) {
        batch.confidence.push(ConfidenceCue {
            start: range.start,
            end: range.end,
            payload: ConfidencePayload {
                confidence: alternative.confidence,
                range,
            },
        });

        let timings: Vec<WordTiming> = alternative
            .words
            .iter()
            .map(|word| WordTiming::place(word, range.start))
            .collect();

        // TODO: split groups on large inter-word gaps instead of a fixed count
        for group in group_words(&timings, words_per_cue) {
            let (Some(first), Some(last)) = (group.first(), group.last()) else {
                continue;
            };
            let text = group
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            batch.captions.push(CaptionCue {
                start: first.start,
                end: last.end,
                text,
            });
        }
    }

    batch
}
