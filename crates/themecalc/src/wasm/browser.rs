//! Browser bindings
//!
//! Compiled only with the `wasm` feature. The page owns the DOM; it forwards
//! clicks and key presses here and reads back the display text and theme class.

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::calculator::WasmCalculator;
use super::dom::THEME_TOGGLE_ID;
use crate::error::{PrefsError, PrefsResult};
use crate::prefs::PreferenceStore;

/// Store backed by `window.localStorage`
///
/// Storage can be missing (privacy modes, sandboxed frames); reads then
/// return nothing and writes fail with a storage error.
#[derive(Debug)]
pub struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageStore {
    /// Connects to the window's local storage
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> PrefsResult<Option<String>> {
        match &self.storage {
            Some(storage) => storage
                .get_item(key)
                .map_err(|err| PrefsError::storage(format!("{err:?}"))),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> PrefsResult<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| PrefsError::storage("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|err| PrefsError::storage(format!("{err:?}")))
    }
}

/// Returns whether the browser reports a dark color scheme
#[must_use]
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Calculator exported to JavaScript
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: WasmCalculator<LocalStorageStore>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator with the stored or system theme
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            inner: WasmCalculator::new(LocalStorageStore::new(), prefers_dark()),
        }
    }

    /// Display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.inner.display().to_string()
    }

    /// Active theme identifier, also the CSS class for the root element
    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.inner.theme_class().to_string()
    }

    /// Active theme position (0-2) for the toggle
    #[wasm_bindgen(getter, js_name = themeIndex)]
    pub fn theme_index(&self) -> usize {
        self.inner.theme().index()
    }

    /// Handles a `KeyboardEvent.key`; returns `true` when consumed so the page
    /// can call `preventDefault`
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.inner.handle_key(key)
    }

    /// Handles a click on a keypad button or the theme toggle
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, id: &str) -> bool {
        let handled = self.inner.handle_button(id);
        if id == THEME_TOGGLE_ID {
            self.report_status();
        }
        handled
    }

    /// Advances to the next theme
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) {
        self.inner.toggle_theme();
        self.report_status();
    }

    /// Clears the calculator
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl BrowserCalculator {
    /// Logs the last preference error to the browser console
    fn report_status(&self) {
        if let Some(status) = self.inner.status() {
            console::warn_1(&status.into());
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"themecalc initialized".into());
}
