//! Round state machine
//!
//! A single `RoundController` drives all three modes. The mode only changes its
//! `RepeatPolicy`: whether finished rounds restart on their own and whether the
//! session runs against a clock.

mod controller;
#[cfg(test)]
pub(crate) mod fixtures;
mod input;
mod session;

pub use controller::{Phase, RoundController, SubmitResult};
pub use input::InputEvent;
pub use session::{GameMode, Outcome, RepeatPolicy, SessionStatus, Tally};
