//! Terminal frontend for the calculator

mod app;
mod input;
mod keypad;
mod palette;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{KeyKind, Keypad, KeypadButton, KeypadWidget};
pub use palette::Palette;
pub use ui::{render, CalculatorLayout, CalculatorUI};
