//! Mock DOM for the calculator page
//!
//! Lets the page logic run and be observed without a browser: elements carry
//! text, attributes and classes, and every dispatched event is recorded.

use std::collections::HashMap;

use crate::keypad::{ButtonKind, Keypad};

/// Class of the element showing the display text
pub const DISPLAY_CLASS: &str = "display";
/// Class of the element showing the pending operator
pub const OPERATION_CLASS: &str = "current-operation";
/// Class marking operator buttons
pub const OPERATOR_CLASS: &str = "operator";
/// Class set on the highlighted operator button
pub const ACTIVE_CLASS: &str = "is-active";
/// Attribute holding a button's token
pub const VALUE_ATTR: &str = "data-value";

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Sets the element ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class (no duplicates)
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes a class
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// In-memory page: elements in document order plus a bounded event log
#[derive(Debug)]
pub struct MockDom {
    elements: Vec<DomElement>,
    index: HashMap<String, usize>,
    event_history: Vec<DomEvent>,
    event_capacity: usize,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Events kept by default; older ones are dropped first
    pub const DEFAULT_EVENT_CAPACITY: usize = 256;

    /// Creates an empty page
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            index: HashMap::new(),
            event_history: Vec::new(),
            event_capacity: Self::DEFAULT_EVENT_CAPACITY,
        }
    }

    /// Sets how many events the log keeps
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self.trim_event_history();
        self
    }

    /// Builds the calculator page: display, operator indicator and one
    /// button per key
    #[must_use]
    pub fn calculator_page(keypad: &Keypad) -> Self {
        let mut dom = Self::new();

        dom.append(
            DomElement::new("div")
                .with_id("calc-display")
                .with_class(DISPLAY_CLASS)
                .with_text("0"),
        );
        dom.append(
            DomElement::new("div")
                .with_id("calc-operation")
                .with_class(OPERATION_CLASS)
                .with_text(crate::view::NO_OPERATION),
        );

        for button in keypad.buttons() {
            let token = button.token();
            let mut element = DomElement::new("button")
                .with_id(&button.id)
                .with_class("btn")
                .with_attr(VALUE_ATTR, &token)
                .with_text(&token);
            if button.kind() == ButtonKind::Operator {
                element.add_class(OPERATOR_CLASS);
            }
            dom.append(element);
        }

        dom
    }

    /// Appends an element; an element with the same ID is replaced
    pub fn append(&mut self, element: DomElement) {
        if element.id.is_empty() {
            self.elements.push(element);
            return;
        }
        if let Some(&i) = self.index.get(&element.id) {
            self.elements[i] = element;
        } else {
            self.index.insert(element.id.clone(), self.elements.len());
            self.elements.push(element);
        }
    }

    /// Returns the number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the page has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.index.get(id).and_then(|&i| self.elements.get(i))
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        let i = *self.index.get(id)?;
        self.elements.get_mut(i)
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }

    /// First element with the class (like `querySelector(".class")`)
    #[must_use]
    pub fn query_class(&self, class: &str) -> Option<&DomElement> {
        self.elements.iter().find(|e| e.has_class(class))
    }

    /// Mutable first element with the class
    pub fn query_class_mut(&mut self, class: &str) -> Option<&mut DomElement> {
        self.elements.iter_mut().find(|e| e.has_class(class))
    }

    /// Every element with the class (like `querySelectorAll(".class")`)
    pub fn query_class_all(&self, class: &str) -> impl Iterator<Item = &DomElement> + '_ {
        let class = class.to_string();
        self.elements.iter().filter(move |e| e.has_class(&class))
    }

    /// Mutable iterator over every element with the class
    pub fn query_class_all_mut(&mut self, class: &str) -> impl Iterator<Item = &mut DomElement> + '_ {
        let class = class.to_string();
        self.elements.iter_mut().filter(move |e| e.has_class(&class))
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
        self.trim_event_history();
    }

    fn trim_event_history(&mut self) {
        let excess = self.event_history.len().saturating_sub(self.event_capacity);
        if excess > 0 {
            self.event_history.drain(..excess);
        }
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }
}
