//! Pocket Calculator CLI Library
//!
//! Command-line front end: scripted presses, the interactive terminal
//! calculator and configuration inspection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, Commands, PressArgs};
pub use config::{load_settings, parse_settings, CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::LogFormat;
pub use output::{OutputFormat, PressReport, Printer, TraceStep};
