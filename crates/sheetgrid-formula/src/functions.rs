//! Range functions and result formatting

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

/// A function applied to the numeric values of a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeFunction {
    Sum,
    Count,
    Max,
    Min,
    Avg,
}

impl RangeFunction {
    /// All supported functions
    pub const ALL: [RangeFunction; 5] = [
        RangeFunction::Sum,
        RangeFunction::Count,
        RangeFunction::Max,
        RangeFunction::Min,
        RangeFunction::Avg,
    ];

    /// Look up a function by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Uppercase function name
    pub fn name(&self) -> &'static str {
        match self {
            RangeFunction::Sum => "SUM",
            RangeFunction::Count => "COUNT",
            RangeFunction::Max => "MAX",
            RangeFunction::Min => "MIN",
            RangeFunction::Avg => "AVG",
        }
    }

    /// Apply the function to a non-empty set of values and format the result
    ///
    /// AVG is fixed to two decimals; everything else uses the shortest
    /// round-trip representation.
    pub fn apply(&self, values: &[f64]) -> String {
        match self {
            RangeFunction::Sum => format_number(values.iter().sum()),
            RangeFunction::Count => values.len().to_string(),
            RangeFunction::Max => format_number(values.iter().copied().fold(f64::NEG_INFINITY, f64::max)),
            RangeFunction::Min => format_number(values.iter().copied().fold(f64::INFINITY, f64::min)),
            RangeFunction::Avg => {
                let sum: f64 = values.iter().sum();
                format_fixed(sum / values.len() as f64, 2)
            }
        }
    }
}

impl fmt::Display for RangeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RangeFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown function '{}'", s))
    }
}

/// Format a number the way it is shown in a cell
///
/// Integral values print without a fraction, very large and very small
/// magnitudes switch to exponent notation (`1e+21`, `1e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".into();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if n == 0.0 {
        return "0".into();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }

    format!("{}", n)
}

/// Format with a fixed number of decimals, rounding halves away from zero
pub fn format_fixed(n: f64, decimals: u32) -> String {
    match Decimal::from_f64_retain(n) {
        Some(value) => {
            let mut rounded =
                value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals);
            rounded.to_string()
        }
        None => format!("{:.*}", decimals as usize, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_name() {
        assert_eq!(RangeFunction::from_name("sum"), Some(RangeFunction::Sum));
        assert_eq!(RangeFunction::from_name("Avg"), Some(RangeFunction::Avg));
        assert_eq!(RangeFunction::from_name("MEDIAN"), None);
        assert_eq!("count".parse::<RangeFunction>(), Ok(RangeFunction::Count));
    }

    #[test]
    fn test_apply() {
        let values = [4.0, -1.5, 10.0];
        assert_eq!(RangeFunction::Sum.apply(&values), "12.5");
        assert_eq!(RangeFunction::Count.apply(&values), "3");
        assert_eq!(RangeFunction::Max.apply(&values), "10");
        assert_eq!(RangeFunction::Min.apply(&values), "-1.5");
        assert_eq!(RangeFunction::Avg.apply(&values), "4.17");
        assert_eq!(RangeFunction::Avg.apply(&[2.0, 3.0]), "2.50");
        assert_eq!(RangeFunction::Avg.apply(&[7.0]), "7.00");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(123456789012.0), "123456789012");
    }

    #[test]
    fn test_format_fixed_rounds_half_away_from_zero() {
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(10.0 / 3.0, 2), "3.33");
    }
}
