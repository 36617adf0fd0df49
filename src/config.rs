//! Game configuration
//!
//! Tunables shared by every front-end. The defaults reproduce the classic rules:
//! six rows, a one second pause between rounds at 60 fps, and a one minute time trial.

use crate::core::MAX_GUESSES;
use std::time::Duration;

/// Frames to hold a finished round on screen before the next one starts
pub const PAUSE_FRAMES: u32 = 60;

/// Time trial length in seconds
pub const TIME_TRIAL_LIMIT_SECS: u64 = 60;

/// Target frame rate of the interactive loop
pub const FRAMES_PER_SECOND: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Rows per round
    pub max_guesses: usize,
    /// Inter-round pause, counted in frames
    pub pause_frames: u32,
    /// Time trial budget
    pub time_limit: Duration,
    /// Target frame rate of the interactive loop
    pub frames_per_second: u32,
    /// Reject guesses that are not in the word list
    pub strict: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            pause_frames: PAUSE_FRAMES,
            time_limit: Duration::from_secs(TIME_TRIAL_LIMIT_SECS),
            frames_per_second: FRAMES_PER_SECOND,
            strict: false,
        }
    }
}

impl GameConfig {
    /// Clamp values that would make the game unplayable
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.max_guesses = self.max_guesses.max(1);
        self.frames_per_second = self.frames_per_second.max(1);
        self
    }

    /// Duration of a single frame at the configured rate
    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frames_per_second.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_rules() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.pause_frames, 60);
        assert_eq!(config.time_limit, Duration::from_secs(60));
        assert!(!config.strict);
    }

    #[test]
    fn normalized_clamps_zeroes() {
        let config = GameConfig {
            max_guesses: 0,
            frames_per_second: 0,
            ..GameConfig::default()
        }
        .normalized();

        assert_eq!(config.max_guesses, 1);
        assert_eq!(config.frames_per_second, 1);
    }

    #[test]
    fn frame_duration_at_sixty_fps() {
        let config = GameConfig::default();
        assert_eq!(config.frame_duration(), Duration::from_nanos(16_666_666));
    }
}
