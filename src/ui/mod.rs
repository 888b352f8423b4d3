//! UI module - ratatui dashboard for the live plant

pub mod display;
pub mod input;
pub mod state;
pub mod terminal;

pub use state::{ActivityLog, LogCategory, LogEntry};
