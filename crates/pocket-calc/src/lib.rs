//! Pocket Calculator
//!
//! A four-function calculator driven one button press at a time, with a
//! terminal front end and a web page front end sharing one state machine.
//!
//! # Principles
//!
//! - **Error prevention**: entry text, operators and commands are typed, so
//!   malformed numbers and unknown operators cannot reach the arithmetic
//! - **Visual feedback**: the pending operator is always highlighted and
//!   completed operations are kept on a tape
//! - **Balanced testing**: one set of scenarios runs against every front end
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_all(["5", "+", "3", "-"]).unwrap();
//!
//! // Chained operators apply the pending one first
//! assert_eq!(calc.display(), "8");
//! assert_eq!(calc.active_operator(), Some(Operator::Subtract));
//!
//! calc.press_all(["2", "="]).unwrap();
//! assert_eq!(calc.display(), "6");
//!
//! // Undefined results show the error screen
//! calc.press_all(["/", "0", "="]).unwrap();
//! assert_eq!(calc.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;

/// Web page front end - always available for testing
/// (the mock DOM needs no browser)
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::core::{
        format_number, operate, CalcError, CalcResult, Calculator, Command, DisplayText,
        Operator, Screen, Settings, Snapshot,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{Keypad, KeypadButton};
    pub use crate::view::{CalculatorView, Transcript};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::web::{DomElement, DomEvent, MockDom, WebCalculator};
}
