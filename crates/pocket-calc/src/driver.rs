//! Unified calculator driver
//!
//! Write the scenario once, run it against every front end. Each front end
//! implements [`CalculatorDriver`] by clicking its own buttons, and the
//! `verify_*` functions below check the observable behavior through it.
//!
//! Scenario functions panic on a failed check (they are meant to be called
//! from tests) and return `Err` only when a driver rejects a token.

use crate::core::{CalcError, CalcResult, Command, Operator};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocket_calc::driver::verify_basic_arithmetic;
/// use pocket_calc::web::WebCalculator;
///
/// let mut page = WebCalculator::new();
/// verify_basic_arithmetic(&mut page).unwrap();
/// ```
pub trait CalculatorDriver {
    /// Clicks the button for `token`
    fn press(&mut self, token: &str) -> CalcResult<()>;

    /// Gets the text currently on the display
    fn display(&self) -> String;

    /// Gets the highlighted operator
    fn active_operator(&self) -> Option<Operator>;

    /// Resets the calculator
    fn clear(&mut self);

    /// Clicks several buttons in order
    fn press_all(&mut self, tokens: &[&str]) -> CalcResult<()> {
        for token in tokens {
            self.press(token)?;
        }
        Ok(())
    }
}

/// Clears, presses `tokens`, and returns the display
fn run<D: CalculatorDriver>(driver: &mut D, tokens: &[&str]) -> CalcResult<String> {
    driver.clear();
    driver.press_all(tokens)?;
    Ok(driver.display())
}

/// TUI driver: presses buttons by clicking their screen position
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::layout::Rect;

    use super::{CalcError, CalcResult, CalculatorDriver};
    use crate::core::{Command, Operator};
    use crate::tui::{button_center, layout, CalculatorApp, InputAction};

    /// Drives [`CalculatorApp`] through mouse clicks on a fixed screen
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
        screen: Rect,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a driver on an 80x24 screen
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(CalculatorApp::new())
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                screen: Rect::new(0, 0, 80, 24),
            }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, token: &str) -> CalcResult<()> {
            let unknown = || CalcError::UnknownToken(token.to_string());
            let command: Command = token.parse()?;
            let index = self.app.keypad().position_of(command).ok_or_else(unknown)?;
            let (x, y) = button_center(self.app.keypad(), layout(self.screen).keypad, index)
                .ok_or_else(unknown)?;
            self.app.apply(InputAction::Click { x, y }, self.screen);
            self.app.apply(InputAction::Release, self.screen);
            Ok(())
        }

        fn display(&self) -> String {
            self.app.display()
        }

        fn active_operator(&self) -> Option<Operator> {
            self.app.active_operator()
        }

        fn clear(&mut self) {
            self.app.clear();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies digit entry, leading zeros and the decimal point
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    assert_eq!(run(driver, &["1", "2", ".", "5"])?, "12.5");
    assert_eq!(run(driver, &["0", "0", "7"])?, "7");
    assert_eq!(run(driver, &[".", "0", "5"])?, "0.05");
    assert_eq!(run(driver, &["3", ".", ".", "1"])?, "3.1");
    Ok(())
}

/// Verifies the four operations and result formatting
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    assert_eq!(run(driver, &["7", "+", "3", "="])?, "10");
    assert_eq!(run(driver, &["9", "-", "4", "="])?, "5");
    assert_eq!(run(driver, &["6", "*", "7", "="])?, "42");
    assert_eq!(run(driver, &["2", "0", "/", "4", "="])?, "5");
    assert_eq!(run(driver, &[".", "1", "+", ".", "2", "="])?, "0.3");
    assert_eq!(driver.active_operator(), None);
    Ok(())
}

/// Verifies left-to-right chaining and operator replacement
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    assert_eq!(run(driver, &["5", "+", "3", "-"])?, "8");
    assert_eq!(driver.active_operator(), Some(Operator::Subtract));
    driver.press_all(&["2", "="])?;
    assert_eq!(driver.display(), "6");

    assert_eq!(run(driver, &["5", "+", "-", "2", "="])?, "3");
    assert_eq!(run(driver, &["2", "*", "3", "=", "*", "4", "="])?, "24");
    assert_eq!(run(driver, &["7", "+", "3", "=", "5"])?, "5");
    Ok(())
}

/// Verifies that `=` without a complete operation changes nothing
pub fn verify_equals_noop<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    assert_eq!(run(driver, &["4", "2", "="])?, "42");
    assert_eq!(run(driver, &["9", "+", "="])?, "9");
    assert_eq!(driver.active_operator(), Some(Operator::Add));
    Ok(())
}

/// Verifies percent
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    assert_eq!(run(driver, &["5", "0", "%"])?, "0.5");
    assert_eq!(run(driver, &["5", "0", "+", "1", "0", "%", "="])?, "50.1");
    Ok(())
}

/// Verifies sign toggle and backspace
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    assert_eq!(run(driver, &["5", "+/-"])?, "-5");
    assert_eq!(run(driver, &["+/-", "5"])?, "-5");
    assert_eq!(run(driver, &["1", "2", "3", "del"])?, "12");
    assert_eq!(run(driver, &["7", "+/-", "del"])?, "0");
    assert_eq!(run(driver, &["7", "+", "+/-", "5", "="])?, "2");
    Ok(())
}

/// Verifies the error state and recovery from it
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    assert_eq!(run(driver, &["5", "/", "0", "="])?, "Error");
    assert_eq!(driver.active_operator(), None);
    driver.press("7")?;
    assert_eq!(driver.display(), "7");
    driver.press_all(&["+", "1", "="])?;
    assert_eq!(driver.display(), "8");
    Ok(())
}

/// Verifies operator highlighting follows the pending operator
pub fn verify_operator_highlight<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    assert_eq!(driver.active_operator(), None);
    for op in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide] {
        driver.press_all(&["1", op.symbol()])?;
        assert_eq!(driver.active_operator(), Some(op));
        driver.clear();
    }
    driver.press_all(&["1", "+", "1", "="])?;
    assert_eq!(driver.active_operator(), None);
    Ok(())
}

/// Verifies unknown tokens are rejected without changing the display
pub fn verify_unknown_token<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    run(driver, &["4"])?;
    let result = driver.press("sqrt");
    assert_eq!(result, Err(CalcError::UnknownToken("sqrt".to_string())));
    assert_eq!(driver.display(), "4");
    Ok(())
}

/// Verifies `C` from the keypad resets the display
pub fn verify_clear_key<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    assert_eq!(run(driver, &["7", "+", "3", Command::CLEAR])?, "0");
    assert_eq!(driver.active_operator(), None);
    Ok(())
}

/// Runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_entry(driver)?;
    verify_basic_arithmetic(driver)?;
    verify_chaining(driver)?;
    verify_equals_noop(driver)?;
    verify_percent(driver)?;
    verify_editing(driver)?;
    verify_error_recovery(driver)?;
    verify_operator_highlight(driver)?;
    verify_unknown_token(driver)?;
    verify_clear_key(driver)
}
