//! Rendering seam between the state machine and its front ends
//!
//! The state machine never draws anything. After each press the owner hands
//! a [`Snapshot`] to a [`CalculatorView`], which shows the display text and
//! highlights the active operator.

use crate::core::{Operator, Snapshot};

/// Something that can show calculator state
pub trait CalculatorView {
    /// Draws the given state
    fn render(&mut self, snapshot: &Snapshot);
}

/// Text shown by operator indicators when nothing is pending
pub const NO_OPERATION: &str = "none";

/// Returns the operator indicator text (`+`, `-`, ... or `none`)
#[must_use]
pub fn operation_label(operator: Option<Operator>) -> &'static str {
    operator.map_or(NO_OPERATION, |op| op.symbol())
}

/// A view that keeps one text line per rendered snapshot
///
/// Lines look like `12.5` or `7 [+]` when an operator is pending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rendered lines
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the last rendered line
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Formats a snapshot as one line
    #[must_use]
    pub fn format_line(snapshot: &Snapshot) -> String {
        match snapshot.active_operator {
            Some(op) => format!("{} [{}]", snapshot.display, op),
            None => snapshot.display.clone(),
        }
    }
}

impl CalculatorView for Transcript {
    fn render(&mut self, snapshot: &Snapshot) {
        self.lines.push(Self::format_line(snapshot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Calculator;

    #[test]
    fn test_operation_label() {
        assert_eq!(operation_label(None), "none");
        assert_eq!(operation_label(Some(Operator::Divide)), "/");
    }

    #[test]
    fn test_transcript_lines() {
        let mut calc = Calculator::new();
        let mut view = Transcript::new();
        for token in ["7", "+", "3", "="] {
            view.render(&calc.press(token).unwrap());
        }
        assert_eq!(view.lines(), ["7", "7 [+]", "3 [+]", "10"]);
        assert_eq!(view.last(), Some("10"));
    }

    #[test]
    fn test_transcript_empty() {
        assert!(Transcript::new().last().is_none());
    }
}
