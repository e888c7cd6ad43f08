//! Timestamp formatting
//!
//! Renders scheduler output into the chapter-marker text published in
//! video descriptions: a hook marker at 0:00, one marker per segment,
//! and a closing marker where the call-to-action begins.

use serde::{Deserialize, Serialize};
use vela_core::VelaError;

use crate::scheduler::VideoTiming;

/// Format whole seconds as "M:SS"
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format whole seconds as "MM:SS" with a zero-padded minute field
pub fn format_timestamp_padded(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Parse "M:SS" (or "MM:SS") back into whole seconds
pub fn parse_timestamp(text: &str) -> Result<u64, VelaError> {
    let (minutes, seconds) = text
        .split_once(':')
        .ok_or_else(|| VelaError::TimingError(format!("not a timestamp: {}", text)))?;

    let minutes: u64 = minutes
        .parse()
        .map_err(|_| VelaError::TimingError(format!("bad minute field: {}", text)))?;
    if seconds.len() != 2 {
        return Err(VelaError::TimingError(format!(
            "second field must be two digits: {}",
            text
        )));
    }
    let seconds: u64 = seconds
        .parse()
        .map_err(|_| VelaError::TimingError(format!("bad second field: {}", text)))?;
    if seconds >= 60 {
        return Err(VelaError::TimingError(format!("seconds out of range: {}", text)));
    }

    Ok(minutes * 60 + seconds)
}

/// One chapter marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterMark {
    pub time_seconds: f64,
    pub label: String,
}

impl ChapterMark {
    pub fn render(&self) -> String {
        format!("{} {}", format_timestamp(self.time_seconds), self.label)
    }
}

/// Chapter markers for a computed timing, in chronological order:
/// hook at 0:00, every segment start, then the closing marker at
/// `total - cta` (the end of the final segment).
pub fn generate_timestamps(timing: &VideoTiming) -> Vec<ChapterMark> {
    let mut marks = Vec::with_capacity(timing.segment_timings.len() + 2);

    marks.push(ChapterMark {
        time_seconds: 0.0,
        label: "Hook".to_string(),
    });
    for segment in &timing.segment_timings {
        marks.push(ChapterMark {
            time_seconds: segment.start_time_seconds,
            label: format!("Expression {}", segment.segment_index + 1),
        });
    }
    marks.push(ChapterMark {
        time_seconds: timing.total_duration_seconds - timing.cta_duration_seconds,
        label: "Wrap-up".to_string(),
    });

    marks
}

/// Render markers as the description text block
pub fn render_chapter_list(marks: &[ChapterMark]) -> String {
    marks
        .iter()
        .map(ChapterMark::render)
        .collect::<Vec<_>>()
        .join("\n")
}
