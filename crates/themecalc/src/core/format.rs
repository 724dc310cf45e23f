//! Conversions between display text and numbers

/// Parses display text as a number
///
/// Accepts the partial forms a user can type (`5.`, `.5`) and formatted
/// results (`-3`, `Infinity`). Returns `None` for empty text, a lone `.` or
/// `-`, the error sentinel, and anything that would parse to NaN.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Formats a computed value for the display
///
/// Uses the shortest decimal form that round-trips, so `10.0` shows as `10`
/// and `0.1 + 0.2` keeps its full tail.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // -0 displays as 0
        "0".to_string()
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers_and_decimals() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("3.25"), Some(3.25));
        assert_eq!(parse_number("-3"), Some(-3.0));
    }

    #[test]
    fn test_parse_partial_forms() {
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number(".5"), Some(0.5));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for text in ["", " ", ".", "-", "error", "NaN", "1.2.3"] {
            assert_eq!(parse_number(text), None, "{text:?} should not parse");
        }
    }

    #[test]
    fn test_parse_infinity_round_trips() {
        assert_eq!(parse_number(&format_number(f64::INFINITY)), Some(f64::INFINITY));
        assert_eq!(
            parse_number(&format_number(f64::NEG_INFINITY)),
            Some(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn test_format_integer_has_no_fraction() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
