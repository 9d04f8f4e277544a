//! Button tokens decoded into commands
//!
//! Tokens are decoded once at the input boundary; everything past this point
//! matches on [`Command`] exhaustively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CalcError, CalcResult, Operator};

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Command {
    /// Digit key (0-9)
    Digit(u8),
    /// Decimal point key
    Decimal,
    /// `+/-` key
    ToggleSign,
    /// `C` key
    Clear,
    /// `del` key
    Backspace,
    /// `=` key
    Equals,
    /// Operator key (`+ - * / %`)
    Operator(Operator),
}

impl Command {
    /// Token for the sign toggle key
    pub const TOGGLE_SIGN: &'static str = "+/-";
    /// Token for the clear key
    pub const CLEAR: &'static str = "C";
    /// Token for the backspace key
    pub const BACKSPACE: &'static str = "del";
    /// Token for the equals key
    pub const EQUALS: &'static str = "=";
    /// Token for the decimal point key
    pub const DECIMAL: &'static str = ".";

    /// Creates a digit command, rejecting values above 9
    pub fn digit(d: u8) -> CalcResult<Self> {
        if d <= 9 {
            Ok(Self::Digit(d))
        } else {
            Err(CalcError::InvalidDigit(d))
        }
    }

    /// Decodes a button token
    pub fn parse_token(token: &str) -> CalcResult<Self> {
        token.parse()
    }

    /// Returns the button token that produces this command
    #[must_use]
    pub fn token(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => Self::DECIMAL.to_string(),
            Self::ToggleSign => Self::TOGGLE_SIGN.to_string(),
            Self::Clear => Self::CLEAR.to_string(),
            Self::Backspace => Self::BACKSPACE.to_string(),
            Self::Equals => Self::EQUALS.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
        }
    }

    /// Returns the operator if this is an operator key
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let [b @ b'0'..=b'9'] = token.as_bytes() {
            return Ok(Self::Digit(b - b'0'));
        }

        match token {
            Self::DECIMAL => Ok(Self::Decimal),
            Self::TOGGLE_SIGN => Ok(Self::ToggleSign),
            Self::CLEAR => Ok(Self::Clear),
            Self::BACKSPACE => Ok(Self::Backspace),
            Self::EQUALS => Ok(Self::Equals),
            other => Operator::from_symbol(other)
                .map(Self::Operator)
                .ok_or_else(|| CalcError::UnknownToken(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}
