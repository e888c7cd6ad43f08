//! Seconds/frames conversion for the compositing layer

pub const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Convert seconds to a whole frame count, rounding half away from zero
pub fn seconds_to_frames(seconds: f64, frame_rate: f64) -> i64 {
    (seconds * frame_rate).round() as i64
}

/// Convert a frame count back to seconds
pub fn frames_to_seconds(frames: i64, frame_rate: f64) -> f64 {
    frames as f64 / frame_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        // 0.05 s at 30 fps = 1.5 frames, rounds up
        assert_eq!(seconds_to_frames(0.05, 30.0), 2);
        assert_eq!(seconds_to_frames(-0.05, 30.0), -2);
        assert_eq!(seconds_to_frames(0.04, 30.0), 1);
    }

    #[test]
    fn test_roundtrip_on_whole_frames() {
        for frames in [0i64, 1, 29, 30, 150, 900] {
            let seconds = frames_to_seconds(frames, 30.0);
            assert_eq!(seconds_to_frames(seconds, 30.0), frames);
        }
    }
}
