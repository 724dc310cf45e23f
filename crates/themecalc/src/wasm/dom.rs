//! Mock DOM for browser frontend tests
//!
//! Models just enough of the page (display field, theme toggle, keypad
//! buttons, root theme class) to check the browser logic without web-sys.

use std::collections::HashMap;

use super::keypad::WasmKeypad;

/// Id of the read-only display input
pub const DISPLAY_ID: &str = "calc";
/// Id of the theme toggle
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
/// Id of the calculator root element carrying the theme class
pub const ROOT_ID: &str = "calculator";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
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

    /// Creates an element with an ID
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

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes every class starting with `prefix`
    pub fn remove_classes_with_prefix(&mut self, prefix: &str) {
        self.classes.retain(|c| !c.starts_with(prefix));
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key down anywhere on the page
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
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

    /// Creates a key down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM for testing the browser calculator without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Child element IDs by parent ID, in document order
    children: HashMap<String, Vec<String>>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
    /// Focused element ID
    focused_element: Option<String>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            children: HashMap::new(),
            event_history: Vec::new(),
            focused_element: None,
        }
    }

    /// Creates the calculator page structure
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let display = DomElement::new("input")
            .with_id(DISPLAY_ID)
            .with_attr("type", "text")
            .with_attr("readonly", "true")
            .with_attr("value", "");
        let toggle = DomElement::new("button")
            .with_id(THEME_TOGGLE_ID)
            .with_attr("data-position", "0");

        dom.register_element(DomElement::new("main").with_id(ROOT_ID));
        dom.append_child(ROOT_ID, DomElement::new("h1").with_id("title").with_text("calc"));
        dom.append_child(ROOT_ID, toggle);
        dom.append_child(ROOT_ID, display);
        for button in WasmKeypad::new().create_dom_elements() {
            dom.append_child(ROOT_ID, button);
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Registers `element` and appends its ID to the children of `parent_id`
    ///
    /// Elements without an ID cannot be looked up and are not attached.
    pub fn append_child(&mut self, parent_id: &str, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        self.children
            .entry(parent_id.to_string())
            .or_default()
            .push(element.id.clone());
        self.register_element(element);
    }

    /// Returns the current children of `parent_id`, in document order
    #[must_use]
    pub fn children(&self, parent_id: &str) -> Vec<&DomElement> {
        self.children
            .get(parent_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.elements.get(id))
            .collect()
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event
    ///
    /// A key down outside an input focuses the display, as the page does.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if let DomEvent::KeyDown { .. } = &event {
            let on_input = self
                .focused_element
                .as_deref()
                .and_then(|id| self.elements.get(id))
                .is_some_and(|e| e.tag == "input");
            if !on_input {
                self.focused_element = Some(DISPLAY_ID.to_string());
            }
        }
        self.event_history.push(event);
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

    /// Gets the currently focused element ID
    #[must_use]
    pub fn focused_element(&self) -> Option<&str> {
        self.focused_element.as_deref()
    }

    /// Updates an attribute by element ID
    pub fn set_element_attr(&mut self, id: &str, key: &str, value: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.attributes.insert(key.to_string(), value.to_string());
        }
    }

    /// Gets an attribute by element ID
    #[must_use]
    pub fn get_element_attr(&self, id: &str, key: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.get_attr(key))
    }
}
