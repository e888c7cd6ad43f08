//! Vela Timing: Retention Pacing Engine
//!
//! Decides the temporal structure of a generated video: per-segment
//! durations under a pacing profile, periodic burst sequences that
//! counter viewer fatigue, and the chapter markers derived from the
//! layout. Every function here is pure; the same inputs always produce
//! the same layout.
//!
//! # Example
//!
//! ```
//! use vela_timing::{
//!     calculate_video_timing, generate_timestamps, BurstConfig, TimingParams, TimingProfile,
//! };
//!
//! let profile = TimingProfile::normal();
//! let timing = calculate_video_timing(
//!     30,
//!     &profile,
//!     &BurstConfig::for_profile(&profile),
//!     &TimingParams::default(),
//! );
//!
//! assert_eq!(timing.segment_timings.len(), 30);
//! assert_eq!(generate_timestamps(&timing).len(), 32);
//! ```

pub mod frames;
pub mod profile;
pub mod scheduler;
pub mod timestamps;

pub use frames::{frames_to_seconds, seconds_to_frames, DEFAULT_FRAME_RATE};
pub use profile::{PacingMode, TimingProfile};
pub use scheduler::{
    burst_segment_indices, calculate_video_timing, count_burst_sequences, estimate_video_duration,
    is_burst_segment, segment_duration, BurstConfig, SegmentTiming, TimingParams, VideoTiming,
    MIN_SEGMENTS_FOR_BURSTS,
};
pub use timestamps::{
    format_timestamp, format_timestamp_padded, generate_timestamps, parse_timestamp,
    render_chapter_list, ChapterMark,
};
