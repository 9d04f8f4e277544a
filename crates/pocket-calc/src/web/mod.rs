//! Web front end
//!
//! The page logic runs against a mock DOM so it can be tested natively; the
//! `wasm` feature adds the real browser export.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod page;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{
    DomElement, DomEvent, MockDom, ACTIVE_CLASS, DISPLAY_CLASS, OPERATION_CLASS, OPERATOR_CLASS,
    VALUE_ATTR,
};
pub use page::WebCalculator;
