//! Browser calculator logic
//!
//! Platform-neutral: the wasm-bindgen export and the mock DOM driver both
//! wrap this type, so everything here is testable natively.

use tracing::warn;

use super::dom::THEME_TOGGLE_ID;
use super::keypad::WasmKeypad;
use crate::core::evaluator::{CalcState, Token};
use crate::prefs::PreferenceStore;
use crate::theme::{load_theme, save_theme, Theme};

/// Browser calculator state
#[derive(Debug)]
pub struct WasmCalculator<S: PreferenceStore> {
    state: CalcState,
    theme: Theme,
    store: S,
    keypad: WasmKeypad,
    /// Last preference error, if any
    status: Option<String>,
}

impl<S: PreferenceStore> WasmCalculator<S> {
    /// Creates a calculator whose theme is read from `store`
    ///
    /// The resolved theme is written back at once, like every later change.
    #[must_use]
    pub fn new(mut store: S, prefers_dark: bool) -> Self {
        let theme = load_theme(&store, prefers_dark);
        if let Err(err) = save_theme(&mut store, theme) {
            warn!(%err, "could not save starting theme");
        }
        Self {
            state: CalcState::new(),
            theme,
            store,
            keypad: WasmKeypad::new(),
            status: None,
        }
    }

    /// Handles a `KeyboardEvent.key` value
    ///
    /// Returns `true` when the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match WasmKeypad::key_to_token(key) {
            Some(token) => {
                self.press(token);
                true
            }
            None => false,
        }
    }

    /// Handles a click on the element with `id`
    ///
    /// Returns `true` when the element is a keypad button or the theme toggle.
    pub fn handle_button(&mut self, id: &str) -> bool {
        if id == THEME_TOGGLE_ID {
            self.toggle_theme();
            return true;
        }
        match self.keypad.handle_click(id) {
            Some(token) => {
                self.press(token);
                true
            }
            None => false,
        }
    }

    /// Feeds a token to the calculator
    pub fn press(&mut self, token: Token) {
        self.state.apply(token);
    }

    /// Clears the calculator, keeping the theme
    pub fn reset(&mut self) {
        self.state.apply(Token::Reset);
    }

    /// Advances to the next theme and persists it
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.next());
    }

    /// Switches to `theme` and persists it
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        match save_theme(&mut self.store, theme) {
            Ok(()) => self.status = None,
            Err(err) => {
                warn!(%err, "could not save theme");
                self.status = Some(format!("Theme not saved: {err}"));
            }
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the evaluator state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns the active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the CSS class for the active theme
    #[must_use]
    pub fn theme_class(&self) -> &'static str {
        self.theme.id()
    }

    /// Returns the last preference error
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the preference store
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
