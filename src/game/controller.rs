//! The round controller
//!
//! Owns the grid, the secret word and the outcome of the current round, plus the
//! pause countdown and time trial budget that span rounds. Every operation validates
//! its own preconditions and silently does nothing on misuse.

use super::input::InputEvent;
use super::session::{Outcome, RepeatPolicy, SessionStatus, Tally};
use crate::config::GameConfig;
use crate::core::{Grid, Word, evaluate};
use crate::wordlists::WordSource;
use std::time::Duration;
use tracing::{debug, info};

/// Where the controller is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    RoundEnded(Outcome),
    /// Time trial expired; nothing more is accepted
    SessionOver,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Row incomplete or not accepting input
    Ignored,
    /// Strict mode rejected an unknown word; the row is kept for editing
    NotInWordList,
    /// Feedback stored, next row is active
    Continue,
    Won,
    Lost,
}

pub struct RoundController<'a, S: WordSource + ?Sized> {
    source: &'a S,
    policy: RepeatPolicy,
    strict: bool,
    pause_frames: u32,
    secret: Word,
    grid: Grid,
    outcome: Outcome,
    pause_remaining: u32,
    time_remaining: Duration,
    tally: Tally,
    round: u32,
    finished: bool,
}

impl<'a, S: WordSource + ?Sized> RoundController<'a, S> {
    /// Start a session with a fresh round and an empty tally
    pub fn new(source: &'a S, policy: RepeatPolicy, config: &GameConfig) -> Self {
        let secret = source.pick_random().clone();
        let controller = Self {
            source,
            policy,
            strict: config.strict,
            pause_frames: config.pause_frames,
            secret,
            grid: Grid::new(config.max_guesses),
            outcome: Outcome::InProgress,
            pause_remaining: 0,
            time_remaining: policy.time_limit().unwrap_or_default(),
            tally: Tally::default(),
            round: 1,
            finished: false,
        };

        info!(?policy, "session started");
        debug!(round = controller.round, secret = %controller.secret, "round started");
        controller
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.finished {
            Phase::SessionOver
        } else {
            match self.outcome {
                Outcome::InProgress => Phase::AwaitingInput,
                outcome => Phase::RoundEnded(outcome),
            }
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn policy(&self) -> RepeatPolicy {
        self.policy
    }

    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// 1-based index of the current round within the session
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Frames left before the next round starts
    #[must_use]
    pub const fn pause_remaining(&self) -> u32 {
        self.pause_remaining
    }

    /// Time trial budget left, `None` outside time trials
    #[must_use]
    pub const fn time_remaining(&self) -> Option<Duration> {
        match self.policy {
            RepeatPolicy::Timed { .. } => Some(self.time_remaining),
            _ => None,
        }
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        if self.finished {
            SessionStatus::Finished(self.tally)
        } else {
            SessionStatus::Active
        }
    }

    /// Dispatch one input event; only submits produce a result
    pub fn apply(&mut self, event: InputEvent) -> Option<SubmitResult> {
        match event {
            InputEvent::CharacterTyped(c) => {
                self.apply_character(c);
                None
            }
            InputEvent::Backspace => {
                self.apply_backspace();
                None
            }
            InputEvent::Submit => Some(self.apply_submit()),
            InputEvent::Exit => None,
        }
    }

    /// Type a letter into the active row; returns whether the grid changed
    pub fn apply_character(&mut self, c: char) -> bool {
        if self.phase() != Phase::AwaitingInput || !c.is_ascii_alphabetic() {
            return false;
        }
        // ASCII alphabetic, so the cast is lossless
        let letter = c.to_ascii_lowercase() as u8;
        self.grid.active_mut().is_some_and(|row| row.push(letter))
    }

    /// Erase the last letter of the active row; returns whether the grid changed
    pub fn apply_backspace(&mut self) -> bool {
        if self.phase() != Phase::AwaitingInput {
            return false;
        }
        self.grid.active_mut().is_some_and(|row| row.pop())
    }

    /// Submit the active row if it is full
    pub fn apply_submit(&mut self) -> SubmitResult {
        if self.phase() != Phase::AwaitingInput {
            return SubmitResult::Ignored;
        }
        let Some(guess) = self.grid.active().and_then(|row| row.word()) else {
            return SubmitResult::Ignored;
        };

        if self.strict && !self.source.contains(&guess) {
            debug!(%guess, "rejected guess not in word list");
            return SubmitResult::NotInWordList;
        }

        let (feedback, exact) = evaluate(&guess, &self.secret);
        self.grid.record(feedback);
        debug!(
            row = self.grid.current_row(),
            %guess,
            feedback = %feedback.to_emoji(),
            "guess submitted"
        );

        if exact {
            self.end_round(Outcome::Won);
            return SubmitResult::Won;
        }

        self.grid.advance();
        if self.grid.current_row() == self.grid.max_guesses() {
            self.end_round(Outcome::Lost);
            SubmitResult::Lost
        } else {
            SubmitResult::Continue
        }
    }

    /// Advance the time trial clock by the wall-clock time since the last tick
    ///
    /// Does nothing outside time trials. When the budget runs out the whole session ends,
    /// whatever state the current round is in.
    pub fn tick(&mut self, elapsed: Duration) -> SessionStatus {
        if self.finished || self.policy.time_limit().is_none() {
            return self.status();
        }

        self.time_remaining = self.time_remaining.saturating_sub(elapsed);
        if self.time_remaining.is_zero() {
            self.expire();
        }
        self.status()
    }

    /// Per-frame step: runs the clock, counts down the pause and starts the next round
    pub fn update(&mut self, frame_elapsed: Duration) -> SessionStatus {
        self.tick(frame_elapsed);

        if !self.finished && self.outcome != Outcome::InProgress && self.policy.repeats() {
            self.pause_remaining = self.pause_remaining.saturating_sub(1);
            if self.pause_remaining == 0 {
                self.advance_round();
            }
        }
        self.status()
    }

    /// Start the next round once the pause after a finished round is over
    ///
    /// Only for repeating policies. Time trials count the finished round first.
    pub fn advance_round(&mut self) -> bool {
        if self.finished
            || !self.policy.repeats()
            || self.outcome == Outcome::InProgress
            || self.pause_remaining > 0
        {
            return false;
        }

        if self.policy.time_limit().is_some() {
            self.tally.record(self.outcome);
        }
        self.start_round();
        true
    }

    /// Play again after a classic round has ended
    pub fn restart(&mut self) -> bool {
        if self.policy.repeats() || self.outcome == Outcome::InProgress {
            return false;
        }
        self.start_round();
        true
    }

    fn end_round(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.pause_remaining = self.pause_frames;
        info!(
            round = self.round,
            ?outcome,
            guesses = self.grid.submitted().count(),
            secret = %self.secret,
            "round ended"
        );
    }

    fn start_round(&mut self) {
        self.secret = self.source.pick_random().clone();
        self.grid.clear();
        self.outcome = Outcome::InProgress;
        self.pause_remaining = 0;
        self.round += 1;
        debug!(round = self.round, secret = %self.secret, "round started");
    }

    fn expire(&mut self) {
        match self.outcome {
            // Finished before the clock ran out, still waiting on its pause
            Outcome::Won | Outcome::Lost => self.tally.record(self.outcome),
            Outcome::InProgress => self.outcome = Outcome::Lost,
        }
        self.pause_remaining = 0;
        self.finished = true;
        info!(
            wins = self.tally.wins,
            losses = self.tally.losses,
            "time trial over"
        );
    }
}
