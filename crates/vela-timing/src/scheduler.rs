//! Burst/Timing Scheduler
//!
//! Computes the full temporal layout of a video: per-segment durations,
//! periodic burst sequences, and absolute start/end offsets. Everything
//! here is a pure function of its inputs; recomputation with identical
//! inputs always yields identical output.

use serde::{Deserialize, Serialize};

use crate::profile::TimingProfile;

/// Burst sequences only engage on videos at least this long
pub const MIN_SEGMENTS_FOR_BURSTS: usize = 15;

/// When and how segments become short burst segments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstConfig {
    /// A trigger point lands on every Nth segment (0-based index N-1)
    pub trigger_every_n_segments: usize,

    /// How many consecutive segments after a trigger become bursts
    pub burst_length: usize,

    /// Duration assigned to each burst segment
    pub burst_duration_seconds: f64,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            trigger_every_n_segments: 5,
            burst_length: 3,
            burst_duration_seconds: 5.0,
        }
    }
}

impl BurstConfig {
    /// Default cadence with the profile's burst duration
    pub fn for_profile(profile: &TimingProfile) -> Self {
        Self {
            burst_duration_seconds: profile.burst_duration_seconds,
            ..Self::default()
        }
    }
}

/// Fixed per-video durations around the segment run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingParams {
    pub hook_duration_seconds: f64,
    pub cta_duration_seconds: f64,
    /// Gap between consecutive segments; no trailing gap after the last
    pub transition_duration_seconds: f64,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            hook_duration_seconds: 5.0,
            cta_duration_seconds: 15.0,
            transition_duration_seconds: 0.5,
        }
    }
}

impl TimingParams {
    pub fn with_hook(mut self, seconds: f64) -> Self {
        self.hook_duration_seconds = seconds;
        self
    }

    pub fn with_cta(mut self, seconds: f64) -> Self {
        self.cta_duration_seconds = seconds;
        self
    }

    pub fn with_transition(mut self, seconds: f64) -> Self {
        self.transition_duration_seconds = seconds;
        self
    }
}

/// Placement of one segment on the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentTiming {
    pub segment_index: usize,
    pub duration_seconds: f64,
    pub is_burst: bool,
    pub start_time_seconds: f64,
    pub end_time_seconds: f64,
}

/// The full temporal layout of a video. Derived data: recomputed from
/// scratch on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoTiming {
    pub profile: TimingProfile,
    pub segment_timings: Vec<SegmentTiming>,
    pub total_duration_seconds: f64,
    pub burst_sequence_count: usize,
    pub hook_duration_seconds: f64,
    pub cta_duration_seconds: f64,
}

/// Whether the segment at `index` falls inside a burst run.
///
/// Trigger points sit at 0-based indices N-1, 2N-1, …; each converts
/// the following `burst_length` segments. The trigger segment itself
/// keeps its regular duration.
pub fn is_burst_segment(index: usize, total_segments: usize, config: &BurstConfig) -> bool {
    if total_segments < MIN_SEGMENTS_FOR_BURSTS
        || config.trigger_every_n_segments == 0
        || config.burst_length == 0
    {
        return false;
    }
    if index == 0 || index >= total_segments {
        return false;
    }

    let n = config.trigger_every_n_segments;
    let mut trigger = n - 1;
    while trigger < total_segments && trigger < index {
        if index <= trigger + config.burst_length {
            return true;
        }
        trigger += n;
    }
    false
}

/// All burst indices for a video, ascending
pub fn burst_segment_indices(total_segments: usize, config: &BurstConfig) -> Vec<usize> {
    (0..total_segments)
        .filter(|&index| is_burst_segment(index, total_segments, config))
        .collect()
}

/// Distinct trigger points that yield at least one burst segment
pub fn count_burst_sequences(total_segments: usize, config: &BurstConfig) -> usize {
    if total_segments < MIN_SEGMENTS_FOR_BURSTS
        || config.trigger_every_n_segments == 0
        || config.burst_length == 0
    {
        return 0;
    }

    let n = config.trigger_every_n_segments;
    let mut count = 0;
    let mut trigger = n - 1;
    while trigger < total_segments {
        if trigger + 1 < total_segments {
            count += 1;
        }
        trigger += n;
    }
    count
}

/// Duration for one segment under the active profile
pub fn segment_duration(
    index: usize,
    total_segments: usize,
    profile: &TimingProfile,
    config: &BurstConfig,
) -> f64 {
    if is_burst_segment(index, total_segments, config) {
        config.burst_duration_seconds
    } else {
        profile.segment_duration_seconds
    }
}

/// Walk the segments in order and lay them out on the timeline.
///
/// Time starts at the hook; each segment occupies
/// `[start, start + duration]` and is followed by a transition gap,
/// except the last. The closing call-to-action runs after the final
/// segment.
pub fn calculate_video_timing(
    total_segments: usize,
    profile: &TimingProfile,
    config: &BurstConfig,
    params: &TimingParams,
) -> VideoTiming {
    let mut segment_timings = Vec::with_capacity(total_segments);
    let mut current_time = params.hook_duration_seconds;

    for index in 0..total_segments {
        let is_burst = is_burst_segment(index, total_segments, config);
        let duration = if is_burst {
            config.burst_duration_seconds
        } else {
            profile.segment_duration_seconds
        };

        let start = current_time;
        let end = start + duration;
        segment_timings.push(SegmentTiming {
            segment_index: index,
            duration_seconds: duration,
            is_burst,
            start_time_seconds: start,
            end_time_seconds: end,
        });
        current_time = end + params.transition_duration_seconds;
    }

    // Drop the dangling transition after the last segment
    if total_segments > 0 {
        current_time -= params.transition_duration_seconds;
    }

    VideoTiming {
        profile: profile.clone(),
        segment_timings,
        total_duration_seconds: current_time + params.cta_duration_seconds,
        burst_sequence_count: count_burst_sequences(total_segments, config),
        hook_duration_seconds: params.hook_duration_seconds,
        cta_duration_seconds: params.cta_duration_seconds,
    }
}

/// Closed-form duration estimate. Must agree with the fold in
/// `calculate_video_timing` for every input.
pub fn estimate_video_duration(
    total_segments: usize,
    profile: &TimingProfile,
    config: &BurstConfig,
    params: &TimingParams,
) -> f64 {
    let burst_count = burst_segment_indices(total_segments, config).len();
    let regular_count = total_segments - burst_count;
    let transitions =
        total_segments.saturating_sub(1) as f64 * params.transition_duration_seconds;

    params.hook_duration_seconds
        + regular_count as f64 * profile.segment_duration_seconds
        + burst_count as f64 * config.burst_duration_seconds
        + transitions
        + params.cta_duration_seconds
}
