//! Feed a canned recognition batch through a caption session and print the
//! cues that land on each track.
//!
//! Run with: cargo run --example translate_batch

use anyhow::{Context, Result};
use livecap_captions::{CaptionConfig, CaptionSession, RecognitionResponse, TimeRange};

const BATCH_JSON: &str = r#"{
    "results": [{
        "alternatives": [{
            "transcript": "hello world from the caption pipeline",
            "confidence": 0.87,
            "words": [
                {"start_time": {}, "end_time": {"nanos": 400000000}, "word": "hello"},
                {"start_time": {"nanos": 400000000}, "end_time": {"nanos": 900000000}, "word": "world"},
                {"start_time": {"nanos": 900000000}, "end_time": {"seconds": 1, "nanos": 200000000}, "word": "from"},
                {"start_time": {"seconds": 1, "nanos": 200000000}, "end_time": {"seconds": 1, "nanos": 500000000}, "word": "the"},
                {"start_time": {"seconds": 1, "nanos": 500000000}, "end_time": {"seconds": 2}, "word": "caption"},
                {"start_time": {"seconds": 2}, "end_time": {"seconds": 2, "nanos": 600000000}, "word": "pipeline"}
            ]
        }]
    }]
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut session = CaptionSession::in_memory(CaptionConfig::default())?;
    session.start()?;

    let response: RecognitionResponse =
        serde_json::from_str(BATCH_JSON).context("recognition batch did not parse")?;
    session.process_batch(Some(&response), TimeRange::new(10.0, 13.0))?;

    let captions = session.caption_track().context("captions track missing")?;
    println!("captions:");
    for cue in captions.cues() {
        println!("  {:>7.3} - {:>7.3}  {}", cue.start, cue.end, cue.content);
    }

    let metadata = session.metadata_track().context("metadata track missing")?;
    println!("confidence:");
    for cue in metadata.cues() {
        println!("  {:>7.3} - {:>7.3}  {}", cue.start, cue.end, cue.content);
    }

    session.stop();
    Ok(())
}
