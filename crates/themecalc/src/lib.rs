//! themecalc: a themeable four-function calculator
//!
//! The calculator is an explicit state value fed one [`Token`] at a time;
//! frontends only decode keys or clicks into tokens and draw the display.
//!
//! - [`core`]: input buffer, operators, the evaluator state machine
//! - [`theme`] and [`prefs`]: three themes and where the choice is stored
//! - `tui`: ratatui frontend (default `tui` feature)
//! - [`wasm`]: browser logic with a mock DOM; bindings behind the `wasm` feature
//! - [`driver`]: one test vocabulary for both frontends
//!
//! # Example
//!
//! ```rust
//! use themecalc::prelude::*;
//!
//! let state = run(tokens("5+2+1="));
//! assert_eq!(state.display(), "8");
//!
//! let state = run(tokens("6/0="));
//! assert_eq!(state.display(), ERROR_SENTINEL);
//!
//! let mut store = MemoryStore::new();
//! save_theme(&mut store, Theme::Two).unwrap();
//! assert_eq!(load_theme(&store, true), Theme::Two);
//! ```
//!
//! [`Token`]: core::evaluator::Token

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod prefs;
pub mod theme;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser frontend; the mock DOM is always available for testing
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AppConfig, ColorScheme};
    pub use crate::core::evaluator::{run, tokens, transition, CalcState, Phase, Token};
    pub use crate::core::{CalcError, CalcResult, Operator, ERROR_SENTINEL};
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{AppError, AppResult, PrefsError, PrefsResult};
    pub use crate::prefs::{FileStore, MemoryStore, PreferenceStore};
    pub use crate::theme::{load_theme, save_theme, Theme, THEME_KEY};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{MockDom, WasmCalculator, WasmDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let state = run(tokens("2+3="));
        assert_eq!(state.display(), "5");
        assert_eq!(state.phase(), Phase::Result);
    }

    #[test]
    fn test_transition_is_pure() {
        let before = run(tokens("12+"));
        let after = transition(before.clone(), Token::Digit(4));
        assert_eq!(before.display(), "12");
        assert_eq!(after.display(), "4");
    }

    #[test]
    fn test_operator_apply_direct() {
        assert_eq!(Operator::Multiply.apply(6.0, 7.0).unwrap(), 42.0);
        assert_eq!(
            Operator::Divide.apply(1.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_theme_round_trip_through_store() {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store, false), Theme::One);
        save_theme(&mut store, Theme::Three).unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("theme-3"));
        assert_eq!(load_theme(&store, false), Theme::Three);
    }
}
