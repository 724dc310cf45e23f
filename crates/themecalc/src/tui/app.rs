//! TUI application state

use tracing::warn;

use super::input::KeyAction;
use crate::core::evaluator::{CalcState, Token};
use crate::prefs::{MemoryStore, PreferenceStore};
use crate::theme::{load_theme, save_theme, Theme};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// Evaluator state
    state: CalcState,
    /// Active theme
    theme: Theme,
    /// Where the theme choice is persisted
    store: Box<dyn PreferenceStore>,
    /// Most recent token, for keypad highlighting
    last_pressed: Option<Token>,
    /// Last preference error, shown in the footer
    status: Option<String>,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with an in-memory preference store and the light theme
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Box::new(MemoryStore::new()), false)
    }

    /// Creates an app whose theme is read from `store`, falling back to the
    /// system dark/light signal
    ///
    /// The resolved theme is written back at once, so a first run pins the
    /// system choice instead of following later scheme changes.
    #[must_use]
    pub fn with_store(mut store: Box<dyn PreferenceStore>, prefers_dark: bool) -> Self {
        let theme = load_theme(store.as_ref(), prefers_dark);
        if let Err(err) = save_theme(&mut store, theme) {
            warn!(%err, "could not save starting theme");
        }
        Self {
            state: CalcState::new(),
            theme,
            store,
            last_pressed: None,
            status: None,
            should_quit: false,
        }
    }

    /// Returns the evaluator state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the most recently pressed token
    #[must_use]
    pub fn last_pressed(&self) -> Option<Token> {
        self.last_pressed
    }

    /// Returns the last preference error message
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
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

    /// Feeds a token to the calculator
    pub fn press(&mut self, token: Token) {
        self.state.apply(token);
        self.last_pressed = Some(token);
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

    /// Advances to the next theme and persists it
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.next());
    }

    /// Applies a key action
    pub fn handle(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(token) => self.press(token),
            KeyAction::ToggleTheme => self.toggle_theme(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Returns the preference store
    #[must_use]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }
}
