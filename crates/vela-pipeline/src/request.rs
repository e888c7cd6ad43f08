//! Plan requests
use serde::{Deserialize, Serialize};
use vela_core::ExpressionPair;
use vela_ledger::DEFAULT_RECENT_WINDOW;
use vela_timing::{BurstConfig, TimingParams, TimingProfile};

/// Everything the planner needs for one video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Identifier the ledger will record usage under
    pub video_id: String,

    /// Candidate pairs proposed by script generation
    pub candidates: Vec<ExpressionPair>,

    pub profile: TimingProfile,
    pub burst: BurstConfig,
    pub timing: TimingParams,

    /// How many past videos count as "recent" for exclusion
    pub recent_window: usize,

    /// Seed for reproducible round outcomes; falls back to the
    /// generation context seed, then to entropy
    pub round_seed: Option<u64>,
}

impl PlanRequest {
    pub fn new(video_id: impl Into<String>, candidates: Vec<ExpressionPair>) -> Self {
        let profile = TimingProfile::normal();
        Self {
            video_id: video_id.into(),
            candidates,
            burst: BurstConfig::for_profile(&profile),
            profile,
            timing: TimingParams::default(),
            recent_window: DEFAULT_RECENT_WINDOW,
            round_seed: None,
        }
    }

    /// Set the pacing profile and realign the burst duration to it
    pub fn with_profile(mut self, profile: TimingProfile) -> Self {
        self.burst = BurstConfig::for_profile(&profile);
        self.profile = profile;
        self
    }

    pub fn with_burst(mut self, burst: BurstConfig) -> Self {
        self.burst = burst;
        self
    }

    pub fn with_timing(mut self, timing: TimingParams) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_recent_window(mut self, window: usize) -> Self {
        self.recent_window = window;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.round_seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vela_core::{Difficulty, ExpressionCategory};
    use vela_timing::PacingMode;

    #[test]
    fn test_request_defaults() {
        let request = PlanRequest::new("vid-001", vec![]);

        assert_eq!(request.profile.name, PacingMode::Normal);
        assert_eq!(request.recent_window, DEFAULT_RECENT_WINDOW);
        assert_eq!(request.round_seed, None);
    }

    #[test]
    fn test_with_profile_realigns_burst_duration() {
        let pair = ExpressionPair::new(
            "I'm bored",
            "I am boring",
            "expressing boredom",
            ExpressionCategory::Emotion,
            Difficulty::Beginner,
        );
        let request = PlanRequest::new("vid-001", vec![pair])
            .with_profile(TimingProfile::suspense())
            .with_seed(42);

        assert_eq!(request.profile.name, PacingMode::Suspense);
        assert_eq!(
            request.burst.burst_duration_seconds,
            TimingProfile::suspense().burst_duration_seconds
        );
        assert_eq!(request.round_seed, Some(42));
    }
}
