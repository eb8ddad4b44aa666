//! Formula parser
//!
//! Accepts exactly two shapes:
//! - a bare reference: uppercase column letters followed by a row number (`B12`)
//! - a range function: `NAME(START:END)` where the name and both references
//!   are case-insensitive and may be padded with spaces

use crate::ast::FormulaExpr;
use crate::error::{FormulaError, FormulaResult};
use sheetgrid_core::{CellAddress, CellRange, FORMULA_MARKER};

/// Parse a formula string into an AST
///
/// The leading `=` is optional.
///
/// # Example
/// ```rust
/// use sheetgrid_formula::{parse_formula, FormulaExpr};
/// use sheetgrid_core::CellAddress;
///
/// assert_eq!(
///     parse_formula("=B2").unwrap(),
///     FormulaExpr::Reference(CellAddress::new(1, 1))
/// );
/// assert!(parse_formula("=SUM(A1:A10)").is_ok());
/// assert!(parse_formula("=1+2").is_err());
/// ```
pub fn parse_formula(formula: &str) -> FormulaResult<FormulaExpr> {
    let text = formula.trim();
    let text = text.strip_prefix(FORMULA_MARKER).unwrap_or(text).trim();

    if text.is_empty() {
        return Err(FormulaError::Parse("empty formula".into()));
    }

    if is_bare_reference(text) {
        return Ok(FormulaExpr::Reference(CellAddress::parse(text)?));
    }

    FormulaParser::new(text).parse_range_function()
}

/// The rectangle a formula reads, for highlighting while editing
///
/// Returns `None` when the text does not parse.
pub fn referenced_range(formula: &str) -> Option<CellRange> {
    parse_formula(formula).ok().map(|expr| expr.range())
}

/// `[A-Z]+[0-9]+` with nothing else
fn is_bare_reference(text: &str) -> bool {
    let letters = text.bytes().take_while(u8::is_ascii_uppercase).count();
    let digits = text.len() - letters;
    letters > 0 && digits > 0 && text.as_bytes()[letters..].iter().all(u8::is_ascii_digit)
}

struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn parse_range_function(&mut self) -> FormulaResult<FormulaExpr> {
        let name = self
            .take_while(|b| b.is_ascii_alphabetic() || b == b' ')
            .trim();
        if name.is_empty() {
            return Err(self.error("expected a function name"));
        }

        self.expect(b'(')?;
        let start = self.parse_reference()?;
        self.expect(b':')?;
        let end = self.parse_reference()?;
        self.expect(b')')?;

        if !self.is_at_end() {
            return Err(self.error("unexpected characters after ')'"));
        }

        Ok(FormulaExpr::RangeFunction {
            name: name.to_ascii_uppercase(),
            range: CellRange::new(start, end),
        })
    }

    fn parse_reference(&mut self) -> FormulaResult<CellAddress> {
        self.skip_spaces();
        let letters = self.take_while(|b| b.is_ascii_alphabetic());
        let digits = self.take_while(|b| b.is_ascii_digit());
        self.skip_spaces();

        if letters.is_empty() || digits.is_empty() {
            return Err(self.error("expected a cell reference"));
        }

        Ok(CellAddress::parse(&format!("{}{}", letters, digits))?)
    }

    fn expect(&mut self, byte: u8) -> FormulaResult<()> {
        if self.input.as_bytes().get(self.pos) == Some(&byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", byte as char)))
        }
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && pred(bytes[self.pos]) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn skip_spaces(&mut self) {
        self.take_while(|b| b == b' ');
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn error(&self, message: &str) -> FormulaError {
        FormulaError::Parse(format!(
            "{} at position {} in '{}' (expected FUNCTION(START:END) or a cell reference)",
            message, self.pos, self.input
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn range_fn(name: &str, range: &str) -> FormulaExpr {
        FormulaExpr::RangeFunction {
            name: name.into(),
            range: CellRange::parse(range).unwrap(),
        }
    }

    #[test]
    fn test_bare_reference() {
        assert_eq!(
            parse_formula("=A1").unwrap(),
            FormulaExpr::Reference(CellAddress::new(0, 0))
        );
        assert_eq!(
            parse_formula(" AB10 ").unwrap(),
            FormulaExpr::Reference(CellAddress::new(9, 27))
        );
    }

    #[test]
    fn test_lowercase_bare_reference_is_rejected() {
        assert!(matches!(parse_formula("=a1"), Err(FormulaError::Parse(_))));
    }

    #[test]
    fn test_range_functions() {
        assert_eq!(parse_formula("=SUM(A1:A3)").unwrap(), range_fn("SUM", "A1:A3"));
        assert_eq!(parse_formula("=avg(b2:a1)").unwrap(), range_fn("AVG", "A1:B2"));
        assert_eq!(
            parse_formula("=Max ( c1 : c4 )").unwrap(),
            range_fn("MAX", "C1:C4")
        );
        // unknown names parse; evaluation decides
        assert_eq!(parse_formula("=FOO(A1:A2)").unwrap(), range_fn("FOO", "A1:A2"));
    }

    #[test]
    fn test_rejects_other_shapes() {
        for text in [
            "=",
            "=1+2",
            "=SUM(A1)",
            "=SUM(A1:A2",
            "=SUM(A1:A2)+1",
            "=SUM(1:2)",
            "=SUM(A:B)",
            "=(A1:A2)",
            "=SUM(A1,A2)",
            "hello world",
        ] {
            assert!(
                matches!(parse_formula(text), Err(FormulaError::Parse(_))),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_out_of_grid_reference() {
        assert!(matches!(
            parse_formula("=A0"),
            Err(FormulaError::InvalidReference(_))
        ));
        assert!(matches!(
            parse_formula("=SUM(A1:A999999)"),
            Err(FormulaError::InvalidReference(_))
        ));
    }

    #[test]
    fn test_referenced_range() {
        assert_eq!(
            referenced_range("=SUM(B3:A1)"),
            Some(CellRange::from_indices(0, 0, 2, 1))
        );
        assert_eq!(
            referenced_range("=C4"),
            Some(CellRange::from_indices(3, 2, 3, 2))
        );
        assert_eq!(referenced_range("=oops"), None);
    }
}
