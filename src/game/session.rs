//! Session-level types: mode selection, outcomes and the time trial tally

use crate::config::GameConfig;
use std::fmt;
use std::time::Duration;

/// The three playable modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Classic,
    Endless,
    Timed,
}

impl GameMode {
    pub const ALL: [Self; 3] = [Self::Classic, Self::Endless, Self::Timed];

    /// Menu hotkey
    #[must_use]
    pub const fn hotkey(self) -> char {
        match self {
            Self::Classic => 'c',
            Self::Endless => 'e',
            Self::Timed => 't',
        }
    }

    #[must_use]
    pub fn policy(self, config: &GameConfig) -> RepeatPolicy {
        match self {
            Self::Classic => RepeatPolicy::Classic,
            Self::Endless => RepeatPolicy::Endless,
            Self::Timed => RepeatPolicy::Timed {
                limit: config.time_limit,
            },
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "Classic"),
            Self::Endless => write!(f, "Endless"),
            Self::Timed => write!(f, "Time Trial"),
        }
    }
}

/// What happens after a round ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// One round; the player restarts or exits explicitly
    Classic,
    /// A new round starts after the pause, forever
    Endless,
    /// New rounds start after the pause until `limit` of wall-clock time has passed
    Timed { limit: Duration },
}

impl RepeatPolicy {
    /// Whether finished rounds are followed by a new one automatically
    #[must_use]
    pub const fn repeats(self) -> bool {
        !matches!(self, Self::Classic)
    }

    #[must_use]
    pub const fn time_limit(self) -> Option<Duration> {
        match self {
            Self::Timed { limit } => Some(limit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Cumulative wins and losses over a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

impl Tally {
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => self.wins += 1,
            Outcome::Lost => self.losses += 1,
            Outcome::InProgress => {}
        }
    }

    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins + self.losses
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    /// The time trial ran out; final tally attached
    Finished(Tally),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_hotkeys_are_distinct() {
        let keys: Vec<char> = GameMode::ALL.iter().map(|m| m.hotkey()).collect();
        assert_eq!(keys, ['c', 'e', 't']);
        assert_eq!(GameMode::Timed.to_string(), "Time Trial");
    }

    #[test]
    fn policy_for_modes() {
        let config = GameConfig::default();
        assert!(!GameMode::Classic.policy(&config).repeats());
        assert!(GameMode::Endless.policy(&config).repeats());
        assert_eq!(
            GameMode::Timed.policy(&config).time_limit(),
            Some(config.time_limit)
        );
        assert_eq!(GameMode::Endless.policy(&config).time_limit(), None);
    }

    #[test]
    fn tally_records_outcomes() {
        let mut tally = Tally::default();
        tally.record(Outcome::Won);
        tally.record(Outcome::Lost);
        tally.record(Outcome::Won);
        tally.record(Outcome::InProgress);

        assert_eq!(tally, Tally { wins: 2, losses: 1 });
        assert_eq!(tally.rounds(), 3);
    }
}
