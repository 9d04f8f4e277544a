//! Calculator page logic
//!
//! Clicks arrive by element id, the button's `data-value` is decoded into a
//! command, and the page is re-rendered from the resulting snapshot.

use tracing::debug;

use super::dom::{
    DomEvent, MockDom, ACTIVE_CLASS, DISPLAY_CLASS, OPERATION_CLASS, OPERATOR_CLASS, VALUE_ATTR,
};
use crate::core::{CalcError, CalcResult, Calculator, Operator, Settings, Snapshot};
use crate::driver::CalculatorDriver;
use crate::keypad::Keypad;
use crate::view::{operation_label, CalculatorView};

impl CalculatorView for MockDom {
    fn render(&mut self, snapshot: &Snapshot) {
        if let Some(display) = self.query_class_mut(DISPLAY_CLASS) {
            display.set_text(&snapshot.display);
        }
        if let Some(operation) = self.query_class_mut(OPERATION_CLASS) {
            operation.set_text(operation_label(snapshot.active_operator));
        }

        let active = snapshot.active_operator.map(|op| op.symbol());
        for button in self.query_class_all_mut(OPERATOR_CLASS) {
            let on = active.is_some() && button.get_attr(VALUE_ATTR) == active;
            button.toggle_class(ACTIVE_CLASS, on);
        }
    }
}

/// The calculator page: state machine plus its DOM
#[derive(Debug)]
pub struct WebCalculator {
    calculator: Calculator,
    keypad: Keypad,
    dom: MockDom,
}

impl Default for WebCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WebCalculator {
    /// Creates the page with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Creates the page with custom settings
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        let keypad = Keypad::new();
        let mut page = Self {
            calculator: Calculator::with_settings(settings),
            dom: MockDom::calculator_page(&keypad),
            keypad,
        };
        page.refresh();
        page
    }

    /// Returns the state machine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Handles a click on an element.
    ///
    /// Clicks on elements without a `data-value` are ignored and return
    /// `Ok(None)`.
    pub fn click(&mut self, element_id: &str) -> CalcResult<Option<Snapshot>> {
        self.dom.dispatch_event(DomEvent::click(element_id));

        let Some(token) = self
            .dom
            .get_element(element_id)
            .and_then(|e| e.get_attr(VALUE_ATTR))
            .map(str::to_string)
        else {
            debug!(element_id, "click outside a button");
            return Ok(None);
        };

        let snapshot = self.calculator.press(&token)?;
        self.dom.render(&snapshot);
        Ok(Some(snapshot))
    }

    /// Text of the `.display` element
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        self.dom.query_class(DISPLAY_CLASS).map(|e| e.text_content.as_str())
    }

    /// Text of the `.current-operation` element
    #[must_use]
    pub fn operation_text(&self) -> Option<&str> {
        self.dom
            .query_class(OPERATION_CLASS)
            .map(|e| e.text_content.as_str())
    }

    /// Tokens of the operator buttons carrying `is-active`
    #[must_use]
    pub fn active_buttons(&self) -> Vec<String> {
        self.dom
            .query_class_all(ACTIVE_CLASS)
            .filter_map(|e| e.get_attr(VALUE_ATTR))
            .map(str::to_string)
            .collect()
    }

    fn refresh(&mut self) {
        let snapshot = self.calculator.snapshot();
        self.dom.render(&snapshot);
    }
}

impl CalculatorDriver for WebCalculator {
    fn press(&mut self, token: &str) -> CalcResult<()> {
        let id = self
            .keypad
            .find_by_token(token)
            .map(|b| b.id.clone())
            .ok_or_else(|| CalcError::UnknownToken(token.to_string()))?;
        self.click(&id)?;
        Ok(())
    }

    fn display(&self) -> String {
        self.display_text().unwrap_or_default().to_string()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.operation_text().and_then(Operator::from_symbol)
    }

    fn clear(&mut self) {
        self.calculator.clear_all();
        self.refresh();
    }
}
