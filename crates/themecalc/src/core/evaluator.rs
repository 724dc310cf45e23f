//! Evaluator state machine
//!
//! One stored operand, one pending operator, and a flag that decides whether
//! the next digit starts a fresh number. Operators apply strictly left to
//! right as they are entered: `5 + 2 + 1 =` is `(5 + 2) + 1`.
//!
//! ```rust
//! use themecalc::core::evaluator::{CalcState, Token};
//! use themecalc::core::Operator;
//!
//! let state = [
//!     Token::Digit(7),
//!     Token::Operator(Operator::Add),
//!     Token::Digit(3),
//!     Token::Equals,
//! ]
//! .into_iter()
//! .fold(CalcState::new(), themecalc::core::evaluator::transition);
//!
//! assert_eq!(state.display(), "10");
//! ```

use tracing::debug;

use super::buffer::InputBuffer;
use super::format::format_number;
use super::{CalcResult, Operator};

/// A single input event, already decoded from whatever key or button produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Arithmetic operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Remove the last character of the display
    Delete,
    /// Clear everything
    Reset,
}

impl Token {
    /// Maps a typed character to a token
    ///
    /// Covers digits, `.`, the operator characters and `=`. Named keys such as
    /// Enter or Backspace are mapped by the frontends.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        match c {
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// Returns the label shown on the keypad for this token
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Reset => "RESET".to_string(),
        }
    }

    /// Returns the character this token enters into the buffer, if any
    #[must_use]
    pub fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }
}

/// Coarse phase of the evaluator, derived from [`CalcState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operand stored
    Idle,
    /// Operand stored and operator chosen, waiting for the second operand
    PendingOperator,
    /// A computed result is displayed; the next digit starts fresh
    Result,
}

/// Complete calculator state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalcState {
    buffer: InputBuffer,
    stored_operand: Option<f64>,
    pending_operator: Option<Operator>,
    starting_new: bool,
}

impl CalcState {
    /// Creates the initial empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text to show in the display
    #[must_use]
    pub fn display(&self) -> &str {
        self.buffer.text()
    }

    /// Returns the display buffer
    #[must_use]
    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// Returns the stored left-hand operand
    #[must_use]
    pub fn stored_operand(&self) -> Option<f64> {
        self.stored_operand
    }

    /// Returns the pending operator
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Returns true if the next digit replaces the display
    #[must_use]
    pub fn starting_new(&self) -> bool {
        self.starting_new
    }

    /// Returns true if the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.buffer.is_error()
    }

    /// Returns the current phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.stored_operand.is_some() && self.pending_operator.is_some() {
            Phase::PendingOperator
        } else if self.starting_new {
            Phase::Result
        } else {
            Phase::Idle
        }
    }

    /// Applies one token in place
    pub fn apply(&mut self, token: Token) {
        match token {
            Token::Digit(_) | Token::Decimal => self.enter(token),
            Token::Operator(op) => self.press_operator(op),
            Token::Equals => self.press_equals(),
            Token::Delete => {
                self.buffer.delete_last();
            }
            Token::Reset => *self = Self::default(),
        }
        debug!(?token, display = %self.buffer, phase = ?self.phase(), "calculator transition");
    }

    fn enter(&mut self, token: Token) {
        let Some(c) = token.entry_char() else {
            return;
        };
        if self.starting_new {
            self.buffer.start_with(c);
            self.starting_new = false;
        } else {
            self.buffer.push(c);
        }
    }

    fn press_operator(&mut self, op: Operator) {
        let current = self.buffer.value();
        match (self.stored_operand, current, self.pending_operator) {
            (Some(lhs), Some(rhs), Some(pending)) => {
                self.stored_operand = self.show_result(pending.apply(lhs, rhs));
                self.pending_operator = Some(op);
                self.starting_new = true;
            }
            (_, Some(value), _) => {
                self.stored_operand = Some(value);
                self.pending_operator = Some(op);
                self.starting_new = true;
            }
            _ => self.pending_operator = Some(op),
        }
    }

    fn press_equals(&mut self) {
        let (Some(lhs), Some(rhs), Some(op)) =
            (self.stored_operand, self.buffer.value(), self.pending_operator)
        else {
            return;
        };
        self.show_result(op.apply(lhs, rhs));
        self.stored_operand = None;
        self.pending_operator = None;
        self.starting_new = true;
    }

    /// Writes a result to the display and returns it if it can be reused
    /// as an operand
    fn show_result(&mut self, result: CalcResult<f64>) -> Option<f64> {
        match result {
            Ok(value) => {
                self.buffer.show(format_number(value));
                Some(value).filter(|v| !v.is_nan())
            }
            Err(err) => {
                debug!(%err, "calculation failed");
                self.buffer.show(err.display_text());
                None
            }
        }
    }
}

/// Pure transition function: consumes a state and a token, returns the next state
#[must_use]
pub fn transition(mut state: CalcState, token: Token) -> CalcState {
    state.apply(token);
    state
}

/// Runs a token sequence from the initial state
#[must_use]
pub fn run<I: IntoIterator<Item = Token>>(tokens: I) -> CalcState {
    tokens.into_iter().fold(CalcState::new(), transition)
}

/// Decodes a compact key string (`"7+3="`) into tokens, skipping spaces and
/// characters that are not calculator keys
#[must_use]
pub fn tokens(keys: &str) -> Vec<Token> {
    keys.chars().filter_map(Token::from_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ERROR_SENTINEL;

    fn eval(keys: &str) -> CalcState {
        run(tokens(keys))
    }

    // ===== Token tests =====

    #[test]
    fn test_token_from_char_digits() {
        for d in 0..=9u8 {
            let c = char::from_digit(u32::from(d), 10).unwrap();
            assert_eq!(Token::from_char(c), Some(Token::Digit(d)));
        }
    }

    #[test]
    fn test_token_from_char_symbols() {
        assert_eq!(Token::from_char('.'), Some(Token::Decimal));
        assert_eq!(Token::from_char('='), Some(Token::Equals));
        assert_eq!(
            Token::from_char('*'),
            Some(Token::Operator(Operator::Multiply))
        );
        assert_eq!(Token::from_char('?'), None);
    }

    #[test]
    fn test_token_labels() {
        assert_eq!(Token::Digit(4).label(), "4");
        assert_eq!(Token::Operator(Operator::Multiply).label(), "x");
        assert_eq!(Token::Delete.label(), "DEL");
        assert_eq!(Token::Reset.label(), "RESET");
    }

    // ===== Digit entry =====

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(eval("1234").display(), "1234");
    }

    #[test]
    fn test_single_decimal_point() {
        assert_eq!(eval("1.2.3").display(), "1.23");
    }

    #[test]
    fn test_starting_new_replaces_display() {
        let state = eval("7+3=4");
        assert_eq!(state.display(), "4");
        assert!(!state.starting_new());
    }

    #[test]
    fn test_decimal_after_result_starts_fresh() {
        assert_eq!(eval("7+3=.5").display(), ".5");
    }

    // ===== Operators and equals =====

    #[test]
    fn test_seven_plus_three() {
        assert_eq!(eval("7+3=").display(), "10");
    }

    #[test]
    fn test_divide_by_zero_shows_sentinel() {
        let state = eval("6/0=");
        assert_eq!(state.display(), ERROR_SENTINEL);
        assert!(state.is_error());
        assert_eq!(state.stored_operand(), None);
        assert_eq!(state.pending_operator(), None);
    }

    #[test]
    fn test_left_to_right_chain() {
        let state = eval("5+2+1=");
        assert_eq!(state.display(), "8");
    }

    #[test]
    fn test_no_precedence() {
        assert_eq!(eval("2+3*4=").display(), "20");
    }

    #[test]
    fn test_eager_intermediate_result_displayed() {
        let state = eval("5+2+");
        assert_eq!(state.display(), "7");
        assert_eq!(state.stored_operand(), Some(7.0));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert_eq!(state.phase(), Phase::PendingOperator);
    }

    #[test]
    fn test_operator_on_empty_only_sets_pending() {
        let state = eval("+");
        assert_eq!(state.display(), "");
        assert_eq!(state.stored_operand(), None);
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        assert!(!state.starting_new());
    }

    #[test]
    fn test_second_operator_computes_with_display() {
        let state = eval("5+-");
        assert_eq!(state.display(), "10");
        assert_eq!(state.stored_operand(), Some(10.0));
        assert_eq!(state.pending_operator(), Some(Operator::Subtract));
        assert_eq!(eval("5+-2=").display(), "8");
    }

    #[test]
    fn test_repeated_operator_after_equals_chains() {
        let state = eval("7+3=++");
        assert_eq!(state.display(), "20");
        assert_eq!(state.stored_operand(), Some(20.0));
        assert_eq!(state.pending_operator(), Some(Operator::Add));
    }

    #[test]
    fn test_equals_reuses_display_as_rhs() {
        assert_eq!(eval("5+=").display(), "10");
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let state = eval("42=");
        assert_eq!(state.display(), "42");
        assert!(!state.starting_new());
    }

    #[test]
    fn test_equals_on_empty_is_noop() {
        assert_eq!(eval("="), CalcState::new());
    }

    #[test]
    fn test_equals_clears_operand_and_operator() {
        let state = eval("9-4=");
        assert_eq!(state.display(), "5");
        assert_eq!(state.stored_operand(), None);
        assert_eq!(state.pending_operator(), None);
        assert_eq!(state.phase(), Phase::Result);
    }

    #[test]
    fn test_result_can_start_next_chain() {
        assert_eq!(eval("7+3=*2=").display(), "20");
    }

    #[test]
    fn test_error_mid_chain_drops_operand() {
        let state = eval("6/0+");
        assert_eq!(state.display(), ERROR_SENTINEL);
        assert_eq!(state.stored_operand(), None);
        assert_eq!(state.pending_operator(), Some(Operator::Add));
        // No operand to combine with, so equals does nothing
        assert_eq!(eval("6/0+3=").display(), "3");
    }

    #[test]
    fn test_digit_after_error_starts_fresh() {
        assert_eq!(eval("6/0=12").display(), "12");
    }

    #[test]
    fn test_decimal_results() {
        assert_eq!(eval("1/4=").display(), "0.25");
        assert_eq!(eval(".1+.2=").display(), "0.30000000000000004");
    }

    #[test]
    fn test_negative_result() {
        assert_eq!(eval("2-5=").display(), "-3");
    }

    // ===== Delete and reset =====

    #[test]
    fn test_delete_removes_last_char() {
        let mut state = eval("123");
        state.apply(Token::Delete);
        assert_eq!(state.display(), "12");
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let state = transition(CalcState::new(), Token::Delete);
        assert_eq!(state, CalcState::new());
    }

    #[test]
    fn test_delete_on_sentinel_clears() {
        let mut state = eval("6/0=");
        state.apply(Token::Delete);
        assert_eq!(state.display(), "");
    }

    #[test]
    fn test_reset_returns_initial_state() {
        for keys in ["", "12.5", "7+", "7+3", "7+3=", "6/0=", "5+2+"] {
            let state = transition(eval(keys), Token::Reset);
            assert_eq!(state, CalcState::new(), "after {keys:?}");
            assert_eq!(state.phase(), Phase::Idle);
        }
    }

    // ===== Phases =====

    #[test]
    fn test_phase_progression() {
        assert_eq!(eval("").phase(), Phase::Idle);
        assert_eq!(eval("7").phase(), Phase::Idle);
        assert_eq!(eval("7+").phase(), Phase::PendingOperator);
        assert_eq!(eval("7+3").phase(), Phase::PendingOperator);
        assert_eq!(eval("7+3=").phase(), Phase::Result);
    }

    #[test]
    fn test_tokens_skips_spaces() {
        assert_eq!(
            tokens("7 + 3"),
            vec![
                Token::Digit(7),
                Token::Operator(Operator::Add),
                Token::Digit(3)
            ]
        );
    }
}
