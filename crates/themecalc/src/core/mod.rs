//! Calculator core: display buffer, operators and the evaluator state machine
//!
//! Nothing in here knows about terminals or browsers. Frontends turn key
//! presses into [`evaluator::Token`]s and read [`evaluator::CalcState::display`]
//! back out.

pub mod buffer;
pub mod evaluator;
mod format;
mod operations;

pub use format::{format_number, parse_number};
pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Text shown in the display when a calculation cannot produce a number
pub const ERROR_SENTINEL: &str = "error";

/// Calculator error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
}

impl CalcError {
    /// Returns the text the display shows for this error
    #[must_use]
    pub const fn display_text(self) -> &'static str {
        match self {
            Self::DivisionByZero => ERROR_SENTINEL,
        }
    }
}
