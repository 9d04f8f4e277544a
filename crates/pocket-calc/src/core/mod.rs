//! Core calculator module: state machine, numeric boundaries, token decoding
//!
//! Everything in here is UI-free so the whole input model can be tested
//! without a terminal or a browser.

pub mod command;
pub mod display;
pub mod format;
pub mod machine;
mod operations;
pub mod tape;

pub use command::Command;
pub use display::DisplayText;
pub use format::{format_number, round_to};
pub use machine::{Calculator, Screen, Snapshot};
pub use operations::{operate, Operator};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Arithmetic never fails: undefined results become the error screen.
/// These errors only come from the decoding boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A button token that no key produces
    #[error("Unknown token: {0:?}")]
    UnknownToken(String),
    /// Text that is not a well-formed display entry
    #[error("Invalid display text: {0:?}")]
    InvalidDisplay(String),
    /// A digit outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
}

/// Tunable behavior of the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Decimal places results are rounded to before display
    pub precision: u32,
    /// Text shown for undefined results (division by zero)
    pub error_text: String,
    /// Maximum number of completed operations kept on the tape
    pub tape_capacity: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
            error_text: Self::DEFAULT_ERROR_TEXT.to_string(),
            tape_capacity: tape::Tape::DEFAULT_CAPACITY,
        }
    }
}

impl Settings {
    /// Default rounding applied to results
    pub const DEFAULT_PRECISION: u32 = 12;

    /// Default error display
    pub const DEFAULT_ERROR_TEXT: &'static str = "Error";

    /// Largest precision accepted; f64 carries no more than this
    pub const MAX_PRECISION: u32 = 15;

    /// Creates default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rounding precision (clamped to [`Self::MAX_PRECISION`])
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision.min(Self::MAX_PRECISION);
        self
    }

    /// Set the error display text
    #[must_use]
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Set the tape capacity
    #[must_use]
    pub fn with_tape_capacity(mut self, capacity: usize) -> Self {
        self.tape_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_unknown_token() {
        let err = CalcError::UnknownToken("sqrt".into());
        assert_eq!(err.to_string(), "Unknown token: \"sqrt\"");
    }

    #[test]
    fn test_calc_error_display_invalid_display() {
        let err = CalcError::InvalidDisplay("1.2.3".into());
        assert!(err.to_string().contains("1.2.3"));
    }

    #[test]
    fn test_calc_error_display_invalid_digit() {
        assert_eq!(CalcError::InvalidDigit(12).to_string(), "Invalid digit: 12");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::InvalidDigit(10));
        assert!(err.to_string().contains("digit"));
    }

    // ===== Settings tests =====

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.precision, 12);
        assert_eq!(settings.error_text, "Error");
        assert_eq!(settings.tape_capacity, tape::Tape::DEFAULT_CAPACITY);
    }

    #[test]
    fn test_settings_builders() {
        let settings = Settings::new()
            .with_precision(4)
            .with_error_text("E")
            .with_tape_capacity(3);
        assert_eq!(settings.precision, 4);
        assert_eq!(settings.error_text, "E");
        assert_eq!(settings.tape_capacity, 3);
    }

    #[test]
    fn test_settings_precision_clamped() {
        let settings = Settings::new().with_precision(40);
        assert_eq!(settings.precision, Settings::MAX_PRECISION);
    }

    #[test]
    fn test_settings_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"error_text":"Oops"}"#).unwrap();
        assert_eq!(settings.error_text, "Oops");
        assert_eq!(settings.precision, Settings::DEFAULT_PRECISION);
    }
}
