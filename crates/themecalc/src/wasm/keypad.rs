//! Browser keypad: button ids and keyboard mapping
//!
//! Mirrors the terminal keypad so both frontends expose the same buttons.

use super::dom::DomElement;
use crate::core::evaluator::Token;
use crate::core::Operator;

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// Token fed to the calculator
    pub token: Token,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of grid columns covered
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a one-column button definition
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        Self {
            token,
            id: button_id(token),
            row,
            col,
            span: 1,
        }
    }

    /// Creates a two-column button definition
    #[must_use]
    pub fn wide(token: Token, row: usize, col: usize) -> Self {
        Self {
            span: 2,
            ..Self::new(token, row, col)
        }
    }
}

/// Returns the DOM element id for the button that produces `token`
#[must_use]
pub fn button_id(token: Token) -> String {
    match token {
        Token::Digit(d) => format!("btn-{d}"),
        Token::Decimal => "btn-decimal".to_string(),
        Token::Operator(op) => format!("btn-{}", op_name(op)),
        Token::Equals => "btn-equals".to_string(),
        Token::Delete => "btn-del".to_string(),
        Token::Reset => "btn-reset".to_string(),
    }
}

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// Browser keypad layout
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [DEL]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ . ] [ 0 ] [ / ] [ x ]
/// [   RESET   ] [   =   ]
/// ```
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButtonDef::new(Token::Digit(7), 0, 0),
            KeypadButtonDef::new(Token::Digit(8), 0, 1),
            KeypadButtonDef::new(Token::Digit(9), 0, 2),
            KeypadButtonDef::new(Token::Delete, 0, 3),
            KeypadButtonDef::new(Token::Digit(4), 1, 0),
            KeypadButtonDef::new(Token::Digit(5), 1, 1),
            KeypadButtonDef::new(Token::Digit(6), 1, 2),
            KeypadButtonDef::new(Token::Operator(Operator::Add), 1, 3),
            KeypadButtonDef::new(Token::Digit(1), 2, 0),
            KeypadButtonDef::new(Token::Digit(2), 2, 1),
            KeypadButtonDef::new(Token::Digit(3), 2, 2),
            KeypadButtonDef::new(Token::Operator(Operator::Subtract), 2, 3),
            KeypadButtonDef::new(Token::Decimal, 3, 0),
            KeypadButtonDef::new(Token::Digit(0), 3, 1),
            KeypadButtonDef::new(Token::Operator(Operator::Divide), 3, 2),
            KeypadButtonDef::new(Token::Operator(Operator::Multiply), 3, 3),
            KeypadButtonDef::wide(Token::Reset, 4, 0),
            KeypadButtonDef::wide(Token::Equals, 4, 2),
        ];
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Returns the token for a click on element `id`
    #[must_use]
    pub fn handle_click(&self, id: &str) -> Option<Token> {
        self.find_button_by_id(id).map(|b| b.token)
    }

    /// Maps a `KeyboardEvent.key` value to a token
    #[must_use]
    pub fn key_to_token(key: &str) -> Option<Token> {
        match key {
            "Enter" => Some(Token::Equals),
            "Backspace" => Some(Token::Delete),
            "Escape" => Some(Token::Reset),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    // `x` is a keypad label, not a keyboard shortcut in the browser
                    (Some('x' | 'X'), None) => None,
                    (Some(c), None) => Token::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                let mut elem = DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.token.label())
                    .with_class("key")
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string());
                if btn.span > 1 {
                    elem = elem
                        .with_class("key-wide")
                        .with_attr("data-span", &btn.span.to_string());
                }
                match btn.token {
                    Token::Delete | Token::Reset => elem.with_class("key-function"),
                    Token::Equals => elem.with_class("key-accent"),
                    _ => elem,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_has_all_buttons() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.button_count(), 18);
        for d in 0..=9 {
            assert!(keypad.handle_click(&format!("btn-{d}")).is_some());
        }
    }

    #[test]
    fn test_button_ids_unique() {
        let keypad = WasmKeypad::new();
        let mut ids: Vec<_> = keypad.buttons().iter().map(|b| b.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), keypad.button_count());
    }

    #[test]
    fn test_button_ids() {
        assert_eq!(button_id(Token::Digit(3)), "btn-3");
        assert_eq!(button_id(Token::Operator(Operator::Multiply)), "btn-times");
        assert_eq!(button_id(Token::Delete), "btn-del");
        assert_eq!(button_id(Token::Reset), "btn-reset");
    }

    #[test]
    fn test_handle_click_unknown() {
        assert_eq!(WasmKeypad::new().handle_click("btn-sqrt"), None);
    }

    #[test]
    fn test_key_to_token_named_keys() {
        assert_eq!(WasmKeypad::key_to_token("Enter"), Some(Token::Equals));
        assert_eq!(WasmKeypad::key_to_token("="), Some(Token::Equals));
        assert_eq!(WasmKeypad::key_to_token("Backspace"), Some(Token::Delete));
        assert_eq!(WasmKeypad::key_to_token("Escape"), Some(Token::Reset));
    }

    #[test]
    fn test_key_to_token_characters() {
        assert_eq!(WasmKeypad::key_to_token("7"), Some(Token::Digit(7)));
        assert_eq!(WasmKeypad::key_to_token("."), Some(Token::Decimal));
        assert_eq!(
            WasmKeypad::key_to_token("*"),
            Some(Token::Operator(Operator::Multiply))
        );
        assert_eq!(
            WasmKeypad::key_to_token("/"),
            Some(Token::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_key_to_token_ignores_others() {
        for key in ["x", "Tab", "Shift", "a", "%", ""] {
            assert_eq!(WasmKeypad::key_to_token(key), None, "key {key:?}");
        }
    }

    #[test]
    fn test_create_dom_elements() {
        let elements = WasmKeypad::new().create_dom_elements();
        assert_eq!(elements.len(), 18);
        let equals = elements.iter().find(|e| e.id == "btn-equals").unwrap();
        assert_eq!(equals.text_content, "=");
        assert!(equals.has_class("key-accent"));
        assert!(equals.has_class("key-wide"));
        let del = elements.iter().find(|e| e.id == "btn-del").unwrap();
        assert!(del.has_class("key-function"));
        assert_eq!(del.get_attr("data-col"), Some("3"));
    }
}
