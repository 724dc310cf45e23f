//! On-screen keypad for the terminal calculator
//!
//! Mirrors the button grid of the browser widget so mouse users can click
//! keys, and highlights the key that was pressed last.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use super::palette::Palette;
use crate::core::evaluator::Token;
use crate::core::Operator;

/// Visual class of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Digits, decimal point and operators
    Number,
    /// DEL and RESET
    Function,
    /// The `=` key
    Accent,
}

/// A single keypad button occupying one or more grid cells in a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Token fed to the calculator
    pub token: Token,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a one-cell button
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        Self {
            token,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    /// Creates a two-cell button
    #[must_use]
    pub fn wide(token: Token, row: usize, col: usize) -> Self {
        Self {
            span: 2,
            ..Self::new(token, row, col)
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        self.token.label()
    }

    /// Returns the visual class of the button
    #[must_use]
    pub fn kind(&self) -> KeyKind {
        match self.token {
            Token::Delete | Token::Reset => KeyKind::Function,
            Token::Equals => KeyKind::Accent,
            _ => KeyKind::Number,
        }
    }

    /// Returns true if the button covers grid cell (`row`, `col`)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// The keypad layout - a 4x5 grid of buttons
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [DEL]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ . ] [ 0 ] [ / ] [ x ]
/// [   RESET   ] [   =   ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::new(Token::Digit(7), 0, 0),
            KeypadButton::new(Token::Digit(8), 0, 1),
            KeypadButton::new(Token::Digit(9), 0, 2),
            KeypadButton::new(Token::Delete, 0, 3),
            KeypadButton::new(Token::Digit(4), 1, 0),
            KeypadButton::new(Token::Digit(5), 1, 1),
            KeypadButton::new(Token::Digit(6), 1, 2),
            KeypadButton::new(Token::Operator(Operator::Add), 1, 3),
            KeypadButton::new(Token::Digit(1), 2, 0),
            KeypadButton::new(Token::Digit(2), 2, 1),
            KeypadButton::new(Token::Digit(3), 2, 2),
            KeypadButton::new(Token::Operator(Operator::Subtract), 2, 3),
            KeypadButton::new(Token::Decimal, 3, 0),
            KeypadButton::new(Token::Digit(0), 3, 1),
            KeypadButton::new(Token::Operator(Operator::Divide), 3, 2),
            KeypadButton::new(Token::Operator(Operator::Multiply), 3, 3),
            KeypadButton::wide(Token::Reset, 4, 0),
            KeypadButton::wide(Token::Equals, 4, 2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Gets the button covering grid cell (`row`, `col`)
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds the button index for a token
    #[must_use]
    pub fn find(&self, token: Token) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Highlights the button for `token`, releasing all others
    pub fn highlight(&mut self, token: Token) {
        self.release_all();
        if let Some(btn) = self.buttons.iter_mut().find(|b| b.token == token) {
            btn.pressed = true;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Returns the area inside the keypad border
    fn inner(area: Rect) -> Rect {
        Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }

    /// Converts a click position inside `area` to the token of the button there
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Token> {
        let inner = Self::inner(area);
        if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height
        {
            return None;
        }

        let btn_width = inner.width / self.cols as u16;
        let btn_height = inner.height / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((x - inner.x) / btn_width) as usize;
        let row = ((y - inner.y) / btn_height) as usize;
        self.get_button_at(row, col).map(|b| b.token)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    palette: Palette,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad, palette: Palette) -> Self {
        Self { keypad, palette }
    }

    fn button_style(&self, btn: &KeypadButton) -> Style {
        let p = &self.palette;
        let (bg, fg) = match btn.kind() {
            KeyKind::Number => (p.key, p.key_text),
            KeyKind::Function => (p.function_key, p.function_key_text),
            KeyKind::Accent => (p.accent, p.accent_text),
        };
        let style = Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);
        if btn.pressed {
            style.bg(p.pressed).add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.screen))
            .style(Style::default().bg(self.palette.screen))
            .render(area, buf);

        let inner = Keypad::inner(area);
        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for btn in self.keypad.buttons() {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height;
            // One column and row of gap between keys when there is room
            let width = (btn.span as u16 * btn_width).saturating_sub(u16::from(btn_width > 2));
            let height = btn_height.saturating_sub(u16::from(btn_height > 2));
            let rect = Rect::new(x, y, width.max(1), height.max(1));

            let style = self.button_style(btn);
            buf.set_style(rect, style);

            let label = btn.label();
            let label_x = x + width.saturating_sub(label.len() as u16) / 2;
            let label_y = y + height / 2;
            buf.set_stringn(label_x, label_y, &label, width as usize, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 18);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_every_cell_covered_once() {
        let keypad = Keypad::new();
        for row in 0..5 {
            for col in 0..4 {
                let covering = keypad.buttons().filter(|b| b.covers(row, col)).count();
                assert_eq!(covering, 1, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_get_button_at() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().token, Token::Digit(7));
        assert_eq!(keypad.get_button_at(0, 3).unwrap().token, Token::Delete);
        assert_eq!(
            keypad.get_button_at(3, 3).unwrap().token,
            Token::Operator(Operator::Multiply)
        );
        assert_eq!(keypad.get_button_at(4, 1).unwrap().token, Token::Reset);
        assert_eq!(keypad.get_button_at(4, 3).unwrap().token, Token::Equals);
        assert!(keypad.get_button_at(5, 0).is_none());
    }

    #[test]
    fn test_button_kinds() {
        assert_eq!(KeypadButton::new(Token::Digit(1), 0, 0).kind(), KeyKind::Number);
        assert_eq!(KeypadButton::new(Token::Delete, 0, 0).kind(), KeyKind::Function);
        assert_eq!(KeypadButton::wide(Token::Equals, 0, 0).kind(), KeyKind::Accent);
    }

    #[test]
    fn test_highlight_single_button() {
        let mut keypad = Keypad::new();
        keypad.highlight(Token::Digit(5));
        keypad.highlight(Token::Equals);
        let pressed: Vec<_> = keypad.buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].token, Token::Equals);
        keypad.release_all();
        assert!(keypad.buttons().all(|b| !b.pressed));
    }

    #[test]
    fn test_find() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find(Token::Digit(7)), Some(0));
        assert!(keypad.find(Token::Operator(Operator::Divide)).is_some());
    }

    #[test]
    fn test_hit_test() {
        let keypad = Keypad::new();
        // 4 cols x 5 cells wide plus border, 5 rows x 2 lines tall plus border
        let area = Rect::new(10, 5, 22, 12);
        assert_eq!(keypad.hit_test(area, 11, 6), Some(Token::Digit(7)));
        assert_eq!(keypad.hit_test(area, 11 + 5 * 3, 6), Some(Token::Delete));
        assert_eq!(keypad.hit_test(area, 11 + 5, 6 + 2 * 4), Some(Token::Reset));
        assert_eq!(keypad.hit_test(area, 11 + 5 * 2, 6 + 2 * 4), Some(Token::Equals));
    }

    #[test]
    fn test_hit_test_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 22, 12);
        assert_eq!(keypad.hit_test(area, 0, 0), None);
        assert_eq!(keypad.hit_test(area, 10, 5), None); // border
        assert_eq!(keypad.hit_test(area, 40, 20), None);
    }

    #[test]
    fn test_render_labels() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 30, 17);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad, Palette::for_theme(Theme::One)).render(area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("DEL"));
        assert!(content.contains("RESET"));
        assert!(content.contains('='));
    }

    #[test]
    fn test_render_too_small_does_not_panic() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad, Palette::for_theme(Theme::Two)).render(area, &mut buf);
    }
}
