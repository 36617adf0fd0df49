//! Interactive TUI interface
//!
//! Menu plus the three game modes, drawn with ratatui on a crossterm backend.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Screen, Statistics, input_event, run_tui};
