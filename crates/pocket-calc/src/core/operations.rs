//! Binary operators and their arithmetic
//!
//! Error prevention: operators are a closed enum, so the arithmetic step can
//! never see an unrecognized operator.

use serde::{Deserialize, Serialize};

/// Operator awaiting its right operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Percent (%)
    Percent,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Percent,
    ];

    /// Returns the operator symbol, which is also its button token
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Percent => "%",
        }
    }

    /// Looks an operator up by its symbol
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Returns a lowercase name (used for element ids)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
            Self::Percent => "percent",
        }
    }

    /// Returns true if this operator applies to the current entry at once
    /// instead of waiting for a right operand
    #[must_use]
    pub const fn is_immediate(&self) -> bool {
        matches!(self, Self::Percent)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `op` to `a` and `b`.
///
/// Division (and percent) by zero yields NaN rather than failing; the
/// caller turns any non-finite value into the error screen.
#[must_use]
pub fn operate(op: Operator, a: f64, b: f64) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide | Operator::Percent => {
            if b == 0.0 {
                f64::NAN
            } else {
                a / b
            }
        }
    }
}
