//! Terminal front end
//!
//! Mouse-driven: buttons are clicked on the drawn keypad.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::{run, CalculatorApp};
pub use input::{InputAction, InputHandler};
pub use keypad::{button_center, hit_test, KeypadWidget};
pub use ui::{layout, render, CalculatorUI, UiLayout};
