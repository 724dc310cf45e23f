//! Display buffer holding the number being typed

use super::format::parse_number;
use super::ERROR_SENTINEL;

/// Text of the number currently shown in the display
///
/// While the user types, the buffer holds digits with at most one `.` and
/// never a redundant leading zero. After a calculation it may hold a formatted
/// result (`-3`, `Infinity`) or the error sentinel; typing into such text
/// replaces it instead of appending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the buffer text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if the buffer shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.text == ERROR_SENTINEL
    }

    /// Returns the numeric value of the buffer, if it holds one
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        parse_number(&self.text)
    }

    /// Returns true if the text is something a user could have typed:
    /// an optional leading `-` followed by digits and `.`
    fn is_entry(&self) -> bool {
        let digits = self.text.strip_prefix('-').unwrap_or(&self.text);
        digits.chars().all(|c| c.is_ascii_digit() || c == '.')
    }

    /// Replaces the whole buffer with arbitrary text (results, sentinel)
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replaces the buffer with a single entry character
    ///
    /// Returns false if `c` is not a digit or `.`.
    pub fn start_with(&mut self, c: char) -> bool {
        if !is_entry_char(c) {
            return false;
        }
        self.text.clear();
        self.text.push(c);
        true
    }

    /// Appends a digit or `.`
    ///
    /// Returns false when the character is rejected: a second decimal point,
    /// a zero after a lone zero, or anything that is not a digit or `.`.
    pub fn push(&mut self, c: char) -> bool {
        if !is_entry_char(c) {
            return false;
        }
        if !self.is_entry() {
            return self.start_with(c);
        }
        if c == '.' {
            if self.text.contains('.') {
                return false;
            }
            self.text.push('.');
            return true;
        }

        let digits = self.text.strip_prefix('-').unwrap_or(&self.text);
        if digits == "0" {
            if c == '0' {
                return false;
            }
            // Replace the lone zero, keeping any sign
            self.text.pop();
        }
        self.text.push(c);
        true
    }

    /// Removes the last character
    ///
    /// Result text that was not typed (the error sentinel, `Infinity`) is
    /// cleared whole. Returns false on an empty buffer.
    pub fn delete_last(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        if self.is_entry() {
            self.text.pop();
        } else {
            self.text.clear();
        }
        true
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl std::fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

const fn is_entry_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(chars: &str) -> InputBuffer {
        let mut buf = InputBuffer::new();
        for c in chars.chars() {
            buf.push(c);
        }
        buf
    }

    #[test]
    fn test_new_is_empty() {
        let buf = InputBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.text(), "");
        assert_eq!(buf.value(), None);
    }

    #[test]
    fn test_push_digits_concatenates() {
        assert_eq!(typed("1234").text(), "1234");
    }

    #[test]
    fn test_second_decimal_rejected() {
        let mut buf = typed("1.5");
        assert!(!buf.push('.'));
        assert_eq!(buf.text(), "1.5");
    }

    #[test]
    fn test_leading_decimal_allowed() {
        let buf = typed(".5");
        assert_eq!(buf.text(), ".5");
        assert_eq!(buf.value(), Some(0.5));
    }

    #[test]
    fn test_double_zero_rejected() {
        let mut buf = typed("0");
        assert!(!buf.push('0'));
        assert_eq!(buf.text(), "0");
    }

    #[test]
    fn test_zero_replaced_by_nonzero_digit() {
        assert_eq!(typed("05").text(), "5");
    }

    #[test]
    fn test_zero_then_decimal_kept() {
        assert_eq!(typed("0.05").text(), "0.05");
    }

    #[test]
    fn test_non_entry_char_rejected() {
        let mut buf = InputBuffer::new();
        assert!(!buf.push('+'));
        assert!(!buf.start_with('a'));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_start_with_replaces() {
        let mut buf = typed("99");
        assert!(buf.start_with('4'));
        assert_eq!(buf.text(), "4");
    }

    #[test]
    fn test_push_onto_sentinel_replaces() {
        let mut buf = InputBuffer::new();
        buf.show(ERROR_SENTINEL);
        assert!(buf.is_error());
        assert!(buf.push('3'));
        assert_eq!(buf.text(), "3");
    }

    #[test]
    fn test_push_onto_negative_result_appends() {
        let mut buf = InputBuffer::new();
        buf.show("-3");
        assert!(buf.push('2'));
        assert_eq!(buf.text(), "-32");
        assert_eq!(buf.value(), Some(-32.0));
    }

    #[test]
    fn test_delete_last() {
        let mut buf = typed("123");
        assert!(buf.delete_last());
        assert_eq!(buf.text(), "12");
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let mut buf = InputBuffer::new();
        assert!(!buf.delete_last());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_delete_clears_sentinel() {
        let mut buf = InputBuffer::new();
        buf.show(ERROR_SENTINEL);
        assert!(buf.delete_last());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut buf = typed("42");
        buf.clear();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(typed("7.25").to_string(), "7.25");
    }
}
