//! Terminal application state and event loop

use std::io;

use crossterm::event;
use ratatui::{backend::Backend, layout::Rect, Terminal};
use tracing::{debug, warn};

use super::input::{InputAction, InputHandler};
use super::keypad::hit_test;
use super::ui;
use crate::core::{CalcResult, Calculator, Operator, Settings, Snapshot};
use crate::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    /// Button held down by the mouse
    pressed: Option<usize>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates a calculator app with custom settings
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            calculator: Calculator::with_settings(settings),
            keypad: Keypad::new(),
            pressed: None,
            should_quit: false,
        }
    }

    /// Returns the state machine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> String {
        self.calculator.display()
    }

    /// Returns the pending operator
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        self.calculator.active_operator()
    }

    /// Returns the button currently held down
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Clicks the button at `index`
    pub fn click_button(&mut self, index: usize) -> CalcResult<Option<Snapshot>> {
        let Some(button) = self.keypad.get_button(index) else {
            return Ok(None);
        };
        let command = button.command;
        self.pressed = Some(index);
        self.calculator.handle(command).map(Some)
    }

    /// Clicks whatever button lies under `(x, y)` in the keypad area
    pub fn click_at(&mut self, keypad_area: Rect, x: u16, y: u16) -> CalcResult<Option<Snapshot>> {
        match hit_test(&self.keypad, keypad_area, x, y) {
            Some(index) => self.click_button(index),
            None => {
                debug!(x, y, "click outside the keypad");
                Ok(None)
            }
        }
    }

    /// Releases the held button
    pub fn release(&mut self) {
        self.pressed = None;
    }

    /// Resets the calculator
    pub fn clear(&mut self) {
        self.calculator.clear_all();
        self.pressed = None;
    }

    /// Applies one input action given the current screen size
    pub fn apply(&mut self, action: InputAction, screen: Rect) {
        match action {
            InputAction::Click { x, y } => {
                let keypad_area = ui::layout(screen).keypad;
                if let Err(e) = self.click_at(keypad_area, x, y) {
                    warn!(error = %e, "click rejected");
                }
            }
            InputAction::Release => self.release(),
            InputAction::Quit => self.quit(),
            InputAction::None => {}
        }
    }
}

/// Runs the draw / read-event loop until the user quits
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> io::Result<()> {
    let handler = InputHandler::new();

    while !app.should_quit() {
        let screen = terminal.draw(|frame| ui::render(app, frame))?.area;
        let action = handler.handle_event(&event::read()?);
        app.apply(action, screen);
    }

    Ok(())
}
