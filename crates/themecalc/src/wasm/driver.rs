//! Mock-DOM driver for the browser calculator

use super::calculator::WasmCalculator;
use super::dom::{DomEvent, MockDom, DISPLAY_ID, ROOT_ID, THEME_TOGGLE_ID};
use super::keypad::button_id;
use crate::core::evaluator::Token;
use crate::driver::CalculatorDriver;
use crate::prefs::MemoryStore;
use crate::theme::Theme;

/// Driver pairing a browser calculator with a simulated page
#[derive(Debug)]
pub struct WasmDriver {
    calculator: WasmCalculator<MemoryStore>,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver with an empty store and a light system preference
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new(), false)
    }

    /// Creates a driver reading its theme from `store`
    #[must_use]
    pub fn with_store(store: MemoryStore, prefers_dark: bool) -> Self {
        let mut driver = Self {
            calculator: WasmCalculator::new(store, prefers_dark),
            dom: MockDom::calculator(),
        };
        driver.sync_dom();
        driver
    }

    /// Returns the calculator
    #[must_use]
    pub fn calculator(&self) -> &WasmCalculator<MemoryStore> {
        &self.calculator
    }

    /// Returns the simulated page
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Clicks the element with `id`
    pub fn click(&mut self, id: &str) {
        self.dom.dispatch_event(DomEvent::click(id));
        self.calculator.handle_button(id);
        self.sync_dom();
    }

    /// Presses a key on the page
    pub fn key_down(&mut self, key: &str) {
        self.dom.dispatch_event(DomEvent::key_down(key));
        self.calculator.handle_key(key);
        self.sync_dom();
    }

    /// Returns the value of the display input
    #[must_use]
    pub fn display_value(&self) -> Option<&str> {
        self.dom.get_element_attr(DISPLAY_ID, "value")
    }

    /// Copies calculator state into the page: display value, theme class on
    /// the root, toggle position
    fn sync_dom(&mut self) {
        let display = self.calculator.display().to_string();
        self.dom.set_element_attr(DISPLAY_ID, "value", &display);

        if let Some(root) = self.dom.get_element_mut(ROOT_ID) {
            root.remove_classes_with_prefix("theme-");
            root.add_class(self.calculator.theme_class());
        }

        let position = self.calculator.theme().index().to_string();
        self.dom
            .set_element_attr(THEME_TOGGLE_ID, "data-position", &position);
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, token: Token) {
        self.click(&button_id(token));
    }

    fn display(&self) -> String {
        self.display_value().unwrap_or_default().to_string()
    }

    fn theme(&self) -> Theme {
        self.calculator.theme()
    }

    fn toggle_theme(&mut self) {
        self.click(THEME_TOGGLE_ID);
    }
}
