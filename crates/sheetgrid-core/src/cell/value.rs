//! Numeric coercion of cell text
//!
//! Cell content is always stored as a string. The helpers here provide the one
//! numeric interpretation shared by the aggregator, the formula evaluator and
//! alignment inference.

use lazy_regex::{lazy_regex, Lazy, Regex};

/// Matches integers, decimals, percentages and comma-grouped thousands
static NUMERIC_PATTERN: Lazy<Regex> =
    lazy_regex!(r"^\d+$|^\d+\.\d+$|^\d+%$|^(\d{1,3}(,\d{3})+|\d+)(\.\d+)?%?$");

/// Parse the longest numeric prefix of `text`
///
/// Leading whitespace is skipped, then an optional sign, digits with an
/// optional fractional part, and an optional exponent are consumed. Trailing
/// garbage is ignored, so `"12px"` parses as `12.0`. Returns `None` when no
/// digits are found.
///
/// # Examples
/// ```
/// use sheetgrid_core::parse_number;
///
/// assert_eq!(parse_number(" 3.5kg"), Some(3.5));
/// assert_eq!(parse_number("-.5"), Some(-0.5));
/// assert_eq!(parse_number("1e3"), Some(1000.0));
/// assert_eq!(parse_number("x1"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    if s[pos..].starts_with("Infinity") {
        let magnitude = f64::INFINITY;
        return Some(if bytes[0] == b'-' { -magnitude } else { magnitude });
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut digits = pos - int_start;

    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digits += end - frac_start;
        pos = end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
            end += 1;
        }
        let exp_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > exp_start {
            pos = end;
        }
    }

    s[..pos].parse::<f64>().ok()
}

/// Check whether text looks like a number for display purposes
///
/// Accepts plain integers and decimals, percentages and comma-grouped
/// thousands (`"1,234.5"`). Surrounding whitespace is ignored.
pub fn looks_numeric(text: &str) -> bool {
    NUMERIC_PATTERN.is_match(text.trim())
}

/// Tagged view over a cell's string content
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    /// No content
    Empty,
    /// Content with a numeric prefix
    Number(f64),
    /// Any other text
    Text(&'a str),
}

impl<'a> CellValue<'a> {
    /// Classify a string
    pub fn classify(text: &'a str) -> Self {
        if text.is_empty() {
            CellValue::Empty
        } else if let Some(n) = parse_number(text) {
            CellValue::Number(n)
        } else {
            CellValue::Text(text)
        }
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Get the numeric view, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_prefixes() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("  -7.25 "), Some(-7.25));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number("2e"), Some(2.0));
        assert_eq!(parse_number("2e-2"), Some(0.02));
        assert_eq!(parse_number("1,000"), Some(1.0));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_parse_number_rejects() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("x"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("e5"), None);
    }

    #[test]
    fn test_looks_numeric() {
        for text in ["1", "12.5", "50%", "1,234", "1,234.56", "12.5%", " 7 "] {
            assert!(looks_numeric(text), "{text:?} should look numeric");
        }
        for text in ["", "abc", "1.2.3", "12,34", "-5", "1e3", "$5"] {
            assert!(!looks_numeric(text), "{text:?} should not look numeric");
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(CellValue::classify(""), CellValue::Empty);
        assert_eq!(CellValue::classify("3"), CellValue::Number(3.0));
        assert_eq!(CellValue::classify("hi"), CellValue::Text("hi"));
        assert_eq!(CellValue::classify("3").as_number(), Some(3.0));
        assert!(CellValue::classify("").is_empty());
    }
}
