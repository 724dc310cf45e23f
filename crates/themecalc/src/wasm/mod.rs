//! Browser frontend
//!
//! The calculator logic and a mock DOM are always compiled so the browser
//! behavior is tested natively; the wasm-bindgen export needs the `wasm`
//! feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{prefers_dark, BrowserCalculator, LocalStorageStore};
pub use calculator::WasmCalculator;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, ROOT_ID, THEME_TOGGLE_ID};
pub use driver::WasmDriver;
pub use keypad::{button_id, KeypadButtonDef, WasmKeypad};
