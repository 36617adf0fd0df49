//! Terminal output formatting
//!
//! Display utilities for the line-based commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_check_result, print_session_summary};
