//! Browser bindings
//!
//! The page's script forwards each button's `data-value` to
//! [`BrowserCalculator::press`] and redraws from the returned getters.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::{Calculator, Settings};
use crate::view::operation_label;

/// Calculator exported to JavaScript
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Create a calculator with a custom error text
    pub fn with_error_text(error_text: &str) -> Self {
        console_error_panic_hook::set_once();
        Self {
            calculator: Calculator::with_settings(Settings::new().with_error_text(error_text)),
        }
    }

    /// Handle a button token; returns the new display text
    pub fn press(&mut self, token: &str) -> Result<String, JsValue> {
        self.calculator
            .press(token)
            .map(|snapshot| snapshot.display)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Text for the `.display` element
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display()
    }

    /// Text for the `.current-operation` element (`none` when idle)
    #[wasm_bindgen(getter, js_name = currentOperation)]
    pub fn current_operation(&self) -> String {
        operation_label(self.calculator.active_operator()).to_string()
    }

    /// Whether the display shows the error state
    #[wasm_bindgen(getter, js_name = isError)]
    pub fn is_error(&self) -> bool {
        self.calculator.is_error()
    }

    /// Full snapshot as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.calculator.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Tape as JSON
    pub fn tape_json(&self) -> String {
        self.calculator
            .tape()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Reset everything
    pub fn clear(&mut self) {
        self.calculator.clear_all();
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"pocket-calc initialized".into());
}
