//! Frontend-independent calculator driver
//!
//! Test logic is written once against [`CalculatorDriver`] and run against
//! both the terminal app and the mock-DOM browser calculator.

use crate::core::evaluator::{tokens, Token};
use crate::core::{Operator, ERROR_SENTINEL};
use crate::theme::Theme;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use themecalc::driver::{verify_basic_arithmetic, CalculatorDriver};
/// use themecalc::wasm::WasmDriver;
///
/// let mut driver = WasmDriver::new();
/// driver.type_keys("12*3=");
/// assert_eq!(driver.display(), "36");
/// verify_basic_arithmetic(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Feeds one token through the frontend
    fn press(&mut self, token: Token);

    /// Feeds every calculator key in `keys` (`"7+3="`)
    fn type_keys(&mut self, keys: &str) {
        for token in tokens(keys) {
            self.press(token);
        }
    }

    /// Returns the display text
    fn display(&self) -> String;

    /// Returns the active theme
    fn theme(&self) -> Theme;

    /// Advances to the next theme
    fn toggle_theme(&mut self);

    /// Clears the calculator
    fn reset(&mut self) {
        self.press(Token::Reset);
    }
}

/// Terminal driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::KeyEvent;

    use super::CalculatorDriver;
    use crate::core::evaluator::Token;
    use crate::theme::Theme;
    use crate::tui::{CalculatorApp, InputHandler, KeyAction};

    /// Driver wrapping the terminal calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        input: InputHandler,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app with an in-memory store
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                input: InputHandler::new(),
            }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Sends a raw key event through the input handler
        pub fn key(&mut self, event: KeyEvent) {
            let action = self.input.handle_key(event);
            self.app.handle(action);
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, token: Token) {
            self.app.handle(KeyAction::Press(token));
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn theme(&self) -> Theme {
            self.app.theme()
        }

        fn toggle_theme(&mut self) {
            self.app.handle(KeyAction::ToggleTheme);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared verifications =====
// Each starts by resetting, so they can run back to back on one driver.

/// Verifies one operation of each kind
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [("7+3=", "10"), ("10-4=", "6"), ("6*7=", "42"), ("20/4=", "5")] {
        driver.reset();
        driver.type_keys(keys);
        assert_eq!(driver.display(), expected, "keys {keys}");
    }
    driver.reset();
    driver.type_keys("1.5*2=");
    assert_eq!(driver.display(), "3");
}

/// Verifies operators apply strictly left to right
pub fn verify_left_to_right<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("5+2+");
    assert_eq!(driver.display(), "7");
    driver.type_keys("1=");
    assert_eq!(driver.display(), "8");

    driver.reset();
    driver.type_keys("2+3*4=");
    assert_eq!(driver.display(), "20");

    // A second operator computes with the operand still on display
    driver.reset();
    driver.type_keys("5+-");
    assert_eq!(driver.display(), "10");
    driver.type_keys("2=");
    assert_eq!(driver.display(), "8");
}

/// Verifies division by zero shows the error sentinel and recovers
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("6/0=");
    assert_eq!(driver.display(), ERROR_SENTINEL);

    driver.type_keys("4");
    assert_eq!(driver.display(), "4");
    driver.type_keys("+1=");
    assert_eq!(driver.display(), "5");
}

/// Verifies delete and reset
pub fn verify_delete_and_reset<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press(Token::Delete);
    assert_eq!(driver.display(), "");

    driver.type_keys("123");
    driver.press(Token::Delete);
    assert_eq!(driver.display(), "12");

    driver.type_keys("+4");
    driver.reset();
    assert_eq!(driver.display(), "");
    driver.type_keys("2=");
    assert_eq!(driver.display(), "2");
}

/// Verifies an operator on a fresh calculator only queues the operator
pub fn verify_operator_on_empty<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press(Token::Operator(Operator::Multiply));
    assert_eq!(driver.display(), "");
    driver.type_keys("4");
    assert_eq!(driver.display(), "4");
}

/// Verifies the theme toggle visits all three themes and wraps around
pub fn verify_theme_cycle<D: CalculatorDriver>(driver: &mut D) {
    let start = driver.theme();
    let mut seen = vec![start];
    for _ in 0..Theme::ALL.len() - 1 {
        driver.toggle_theme();
        seen.push(driver.theme());
    }
    seen.sort_by_key(|theme| theme.index());
    assert_eq!(seen, Theme::ALL.to_vec());

    driver.toggle_theme();
    assert_eq!(driver.theme(), start);
}

/// Runs every shared verification
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_left_to_right(driver);
    verify_division_by_zero(driver);
    verify_delete_and_reset(driver);
    verify_operator_on_empty(driver);
    verify_theme_cycle(driver);
}
