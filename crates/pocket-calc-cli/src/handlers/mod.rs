//! Command handlers - extracted from main.rs for testability
//!
//! Each handler returns what it would print so tests can check it without
//! capturing stdout.

pub mod config;
pub mod press;
pub mod tui;

pub use config::execute_config;
pub use press::{execute_press, run_press};
pub use tui::execute_tui;
