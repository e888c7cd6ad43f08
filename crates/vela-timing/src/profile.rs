//! Pacing profiles
//!
//! Named presets controlling nominal per-segment duration. A profile is
//! selected once per video and never changes mid-run.

use serde::{Deserialize, Serialize};

/// Pacing regime for an entire video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacingMode {
    Fast,
    Normal,
    Suspense,
}

/// Immutable pacing preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingProfile {
    pub name: PacingMode,

    /// Nominal duration of a regular segment
    pub segment_duration_seconds: f64,

    /// Duration of a burst segment under this profile
    pub burst_duration_seconds: f64,

    pub description: String,
}

impl TimingProfile {
    /// Shorts-style pacing: quick cuts, minimal dwell time
    pub fn fast() -> Self {
        Self {
            name: PacingMode::Fast,
            segment_duration_seconds: 7.0,
            burst_duration_seconds: 4.0,
            description: "Quick cuts for short-form feeds".to_string(),
        }
    }

    /// Default long-form pacing
    pub fn normal() -> Self {
        Self {
            name: PacingMode::Normal,
            segment_duration_seconds: 10.0,
            burst_duration_seconds: 5.0,
            description: "Standard long-form comparison pacing".to_string(),
        }
    }

    /// Slower reveal pacing for quiz reveals
    pub fn suspense() -> Self {
        Self {
            name: PacingMode::Suspense,
            segment_duration_seconds: 13.0,
            burst_duration_seconds: 6.0,
            description: "Held reveals with longer dwell time".to_string(),
        }
    }

    /// Get profile by mode name
    pub fn for_mode(mode: &str) -> Self {
        match mode {
            "fast" => Self::fast(),
            "suspense" => Self::suspense(),
            _ => Self::normal(), // Default to normal
        }
    }
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::normal()
    }
}
