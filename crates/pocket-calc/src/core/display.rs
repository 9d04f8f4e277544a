//! Editable display text
//!
//! The number being typed is kept as text, which makes leading zeros,
//! trailing decimal points and `-0` easy to edit. `DisplayText` keeps the
//! text well formed: an optional leading `-`, digits, and at most one `.`,
//! with no leading zeros except a single `0` before the decimal point.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::{CalcError, CalcResult};

/// Validated text of the number being entered
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayText(String);

impl Default for DisplayText {
    fn default() -> Self {
        Self::zero()
    }
}

impl DisplayText {
    /// The cleared entry, `"0"`
    #[must_use]
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// A fresh entry holding a single digit
    pub fn digit(d: u8) -> CalcResult<Self> {
        let mut text = Self::zero();
        text.push_digit(d)?;
        Ok(text)
    }

    /// A fresh entry of `"0."`
    #[must_use]
    pub fn decimal() -> Self {
        Self("0.".to_string())
    }

    /// Returns the text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the entry is negative (including `-0`)
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Returns true if the entry contains a decimal point
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.0.contains('.')
    }

    /// Appends a digit, replacing a lone `0` or `-0`
    pub fn push_digit(&mut self, d: u8) -> CalcResult<()> {
        let ch = char::from_digit(u32::from(d), 10).ok_or(CalcError::InvalidDigit(d))?;
        match self.0.as_str() {
            "0" => {
                self.0.clear();
                self.0.push(ch);
            }
            "-0" => {
                self.0.truncate(1);
                self.0.push(ch);
            }
            _ => self.0.push(ch),
        }
        Ok(())
    }

    /// Appends a decimal point unless one is already present
    pub fn push_decimal(&mut self) {
        if !self.has_decimal() {
            self.0.push('.');
        }
    }

    /// Adds or removes the leading minus sign
    pub fn toggle_sign(&mut self) {
        if self.is_negative() {
            self.0.remove(0);
        } else {
            self.0.insert(0, '-');
        }
    }

    /// Removes the last character, falling back to `"0"` when nothing
    /// (or only a bare `-`) would remain
    pub fn backspace(&mut self) {
        self.0.pop();
        if self.0.is_empty() || self.0 == "-" {
            *self = Self::zero();
        }
    }

    /// Numeric value of the entry. `"12."` is 12 and `"-0"` is -0.
    #[must_use]
    pub fn value(&self) -> f64 {
        // Well-formed text always parses; the fallback is unreachable in practice.
        self.0.parse().unwrap_or(0.0)
    }

    fn is_well_formed(text: &str) -> bool {
        let unsigned = text.strip_prefix('-').unwrap_or(text);
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };

        let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

        !int_part.is_empty()
            && digits_only(int_part)
            && (int_part == "0" || !int_part.starts_with('0'))
            && frac_part.map_or(true, digits_only)
    }
}

impl FromStr for DisplayText {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_well_formed(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CalcError::InvalidDisplay(s.to_string()))
        }
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for DisplayText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
