//! Calculator state machine
//!
//! Error prevention: the screen is an enum, so "editing", "showing a
//! committed value" and "showing an error" cannot be confused.
//!
//! ```text
//!            digit/./+/-              operator                 =
//!   Idle ──────────────▶ Idle ──────────────▶ OperatorPending ─────▶ Idle
//!                                  ▲                │
//!                                  └── operator ────┘ (chained: applies
//!                                                      the pending one)
//! ```
//!
//! The right operand of a pending operation only exists for the duration of
//! [`Calculator::evaluate`] (or a chained [`Calculator::choose_operator`]).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::format::format_number;
use super::tape::Tape;
use super::{operate, CalcResult, Command, DisplayText, Operator, Settings};

/// What the display is showing
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// The user is typing a number
    Entry(DisplayText),
    /// A committed value (operand, result or percent); the next digit starts
    /// a fresh entry
    Value(f64),
    /// An undefined result such as division by zero
    Error,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Entry(DisplayText::zero())
    }
}

/// Everything a view needs to draw the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Display text, rendered verbatim
    pub display: String,
    /// Operator awaiting its right operand, to be highlighted
    pub active_operator: Option<Operator>,
    /// Left operand carried across chained operations
    pub accumulator: Option<f64>,
    /// Whether the user entered an operand since the last operator or `=`
    pub has_input: bool,
    /// Whether the display shows the error state
    pub error: bool,
}

/// Four-function calculator driven by button presses
///
/// # Example
///
/// ```
/// use pocket_calc::core::Calculator;
///
/// let mut calc = Calculator::new();
/// for token in ["7", "+", "3", "="] {
///     calc.press(token).unwrap();
/// }
/// assert_eq!(calc.display(), "10");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    screen: Screen,
    accumulator: Option<f64>,
    operator: Option<Operator>,
    has_input: bool,
    tape: Tape,
    settings: Settings,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a cleared calculator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates a cleared calculator with custom settings
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            screen: Screen::default(),
            accumulator: None,
            operator: None,
            has_input: false,
            tape: Tape::with_capacity(settings.tape_capacity),
            settings,
        }
    }

    // ===== Accessors =====

    /// Returns the settings in use
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the current screen
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns the accumulator (left operand)
    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// Returns the pending operator
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Returns whether an operand was entered since the last operator or `=`
    #[must_use]
    pub fn has_input(&self) -> bool {
        self.has_input
    }

    /// Returns whether the display shows the error state
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.screen, Screen::Error)
    }

    /// Returns the tape of completed operations
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the text to show on the display
    #[must_use]
    pub fn display(&self) -> String {
        match &self.screen {
            Screen::Entry(text) => text.to_string(),
            Screen::Value(value) => format_number(*value, self.settings.precision)
                .unwrap_or_else(|| self.settings.error_text.clone()),
            Screen::Error => self.settings.error_text.clone(),
        }
    }

    /// Returns the numeric value currently on screen (`None` on error)
    #[must_use]
    pub fn current_value(&self) -> Option<f64> {
        match &self.screen {
            Screen::Entry(text) => Some(text.value()),
            Screen::Value(value) => Some(*value),
            Screen::Error => None,
        }
    }

    /// Captures the state a view renders
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display(),
            active_operator: self.operator,
            accumulator: self.accumulator,
            has_input: self.has_input,
            error: self.is_error(),
        }
    }

    // ===== Dispatch =====

    /// Decodes a button token and handles it.
    ///
    /// Unknown tokens are rejected before any state changes.
    pub fn press(&mut self, token: &str) -> CalcResult<Snapshot> {
        let command: Command = token.parse()?;
        self.handle(command)
    }

    /// Decodes every token first, then handles them in order.
    ///
    /// If any token is unknown nothing is applied.
    pub fn press_all<I, S>(&mut self, tokens: I) -> CalcResult<Snapshot>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let commands = tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<Command>())
            .collect::<CalcResult<Vec<_>>>()?;

        for command in commands {
            self.handle(command)?;
        }
        Ok(self.snapshot())
    }

    /// Handles a decoded command and returns the new snapshot
    pub fn handle(&mut self, command: Command) -> CalcResult<Snapshot> {
        match command {
            Command::Digit(d) => self.input_digit(d)?,
            Command::Decimal => self.input_decimal(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Clear => self.clear_all(),
            Command::Backspace => self.backspace(),
            Command::Equals => self.evaluate(),
            Command::Operator(op) => self.choose_operator(op),
        }

        let snapshot = self.snapshot();
        debug!(
            command = %command,
            display = %snapshot.display,
            operator = ?snapshot.active_operator,
            "handled press"
        );
        Ok(snapshot)
    }

    // ===== Entry editing =====

    /// Types a digit. A committed value or error is replaced by a fresh entry.
    pub fn input_digit(&mut self, d: u8) -> CalcResult<()> {
        match &mut self.screen {
            Screen::Entry(text) if self.has_input => text.push_digit(d)?,
            _ => self.screen = Screen::Entry(DisplayText::digit(d)?),
        }
        self.has_input = true;
        Ok(())
    }

    /// Types a decimal point (ignored if the entry already has one)
    pub fn input_decimal(&mut self) {
        match &mut self.screen {
            Screen::Entry(text) if self.has_input => text.push_decimal(),
            _ => self.screen = Screen::Entry(DisplayText::decimal()),
        }
        self.has_input = true;
    }

    /// Flips the sign of the entry or of the value on screen.
    ///
    /// Right after an operator the shown value is the left operand, so the
    /// sign starts a fresh `-0` entry for the right operand instead.
    pub fn toggle_sign(&mut self) {
        let awaiting_operand = self.operator.is_some() && !self.has_input;
        match &mut self.screen {
            Screen::Value(_) if awaiting_operand => {
                let mut text = DisplayText::zero();
                text.toggle_sign();
                self.screen = Screen::Entry(text);
            }
            Screen::Entry(text) => text.toggle_sign(),
            Screen::Value(value) => *value = -*value,
            Screen::Error => {
                debug!("sign toggle ignored on error screen");
                return;
            }
        }
        self.has_input = true;
    }

    /// Deletes the last character of the entry; a committed value or error
    /// is replaced by `0`
    pub fn backspace(&mut self) {
        match &mut self.screen {
            Screen::Entry(text) => text.backspace(),
            Screen::Value(_) | Screen::Error => self.screen = Screen::Entry(DisplayText::zero()),
        }
    }

    // ===== Operations =====

    /// Selects an operator.
    ///
    /// With no operator pending the current value becomes the accumulator.
    /// With one pending and a new operand typed, the pending operation is
    /// applied first (chaining). With one pending and nothing typed since,
    /// the pending operator is replaced. Percent applies immediately.
    pub fn choose_operator(&mut self, op: Operator) {
        if op.is_immediate() {
            self.percent();
            return;
        }

        let Some(current) = self.current_value() else {
            debug!(operator = %op, "operator ignored on error screen");
            return;
        };

        match (self.operator, self.accumulator) {
            (Some(pending), Some(left)) if self.has_input => {
                let Some(result) = self.apply(pending, left, current) else {
                    return;
                };
                self.accumulator = Some(result);
            }
            (Some(pending), Some(_)) => {
                debug!(from = %pending, to = %op, "replacing pending operator");
            }
            _ => self.accumulator = Some(current),
        }

        self.operator = Some(op);
        self.has_input = false;
        if let Some(left) = self.accumulator {
            self.screen = Screen::Value(left);
        }
    }

    /// Replaces the current operand with a hundredth of itself.
    ///
    /// The accumulator and any pending operator are left alone, so
    /// `50 + 10 % =` gives `50.1`.
    pub fn percent(&mut self) {
        let Some(current) = self.current_value() else {
            debug!("percent ignored on error screen");
            return;
        };
        self.screen = Screen::Value(operate(Operator::Percent, current, 100.0));
        self.has_input = true;
    }

    /// Applies the pending operation (the `=` key).
    ///
    /// Does nothing when no operator is pending, no accumulator exists, or
    /// nothing was typed since the operator.
    pub fn evaluate(&mut self) {
        let (Some(op), Some(left)) = (self.operator, self.accumulator) else {
            debug!("= ignored: no pending operation");
            return;
        };
        if !self.has_input {
            debug!(operator = %op, "= ignored: no operand entered");
            return;
        }
        let Some(right) = self.current_value() else {
            return;
        };

        if let Some(result) = self.apply(op, left, right) {
            self.accumulator = Some(result);
            self.operator = None;
            self.has_input = false;
            self.screen = Screen::Value(result);
        }
    }

    /// Resets every field, including the tape
    pub fn clear_all(&mut self) {
        self.screen = Screen::default();
        self.accumulator = None;
        self.operator = None;
        self.has_input = false;
        self.tape.clear();
    }

    /// Runs one binary operation. Non-finite results switch to the error
    /// screen and return `None`.
    fn apply(&mut self, op: Operator, left: f64, right: f64) -> Option<f64> {
        let result = operate(op, left, right);
        if result.is_finite() {
            self.tape.record(left, op, right, result);
            Some(result)
        } else {
            warn!(%left, operator = %op, %right, "undefined result");
            self.enter_error();
            None
        }
    }

    fn enter_error(&mut self) {
        self.screen = Screen::Error;
        self.accumulator = None;
        self.operator = None;
        self.has_input = false;
    }
}
