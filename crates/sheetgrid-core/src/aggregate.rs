//! Selection statistics
//!
//! [`Aggregates::compute`] folds a 2-D collection of raw values into
//! sum/count/average/min/max. Values without a numeric reading are skipped.

use crate::cell::parse_number;

/// Something that may be read as a number
pub trait NumericSource {
    /// The numeric reading, or `None` to skip the value
    fn numeric(&self) -> Option<f64>;
}

impl NumericSource for str {
    fn numeric(&self) -> Option<f64> {
        parse_number(self)
    }
}

impl NumericSource for String {
    fn numeric(&self) -> Option<f64> {
        parse_number(self)
    }
}

impl NumericSource for f64 {
    fn numeric(&self) -> Option<f64> {
        (!self.is_nan()).then_some(*self)
    }
}

impl<T: NumericSource> NumericSource for Option<T> {
    fn numeric(&self) -> Option<f64> {
        self.as_ref().and_then(T::numeric)
    }
}

impl<T: NumericSource + ?Sized> NumericSource for &T {
    fn numeric(&self) -> Option<f64> {
        (**self).numeric()
    }
}

/// Summary statistics over the numeric values of a selection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aggregates {
    pub sum: f64,
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl Aggregates {
    /// Compute statistics over rows of raw values
    ///
    /// All fields are zero when no value is numeric.
    ///
    /// ```
    /// use sheetgrid_core::Aggregates;
    ///
    /// let stats = Aggregates::compute([["10", "20", "x"]]);
    /// assert_eq!(stats.sum, 30.0);
    /// assert_eq!(stats.count, 2);
    /// assert_eq!(stats.average, 15.0);
    /// ```
    pub fn compute<R, I>(rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: NumericSource,
    {
        Self::from_numbers(
            rows.into_iter()
                .flat_map(|row| row.into_iter())
                .filter_map(|value| value.numeric()),
        )
    }

    /// Compute statistics over numbers that are already parsed
    pub fn from_numbers(numbers: impl IntoIterator<Item = f64>) -> Self {
        let mut stats = Aggregates {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            ..Aggregates::default()
        };

        for n in numbers {
            stats.sum += n;
            stats.count += 1;
            stats.min = stats.min.min(n);
            stats.max = stats.max.max(n);
        }

        if stats.count == 0 {
            return Aggregates::default();
        }
        stats.average = stats.sum / stats.count as f64;
        stats
    }

    /// Check if no numeric value was found
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mixed_values() {
        let stats = Aggregates::compute([["10", "20", "x"]]);
        assert_eq!(
            stats,
            Aggregates {
                sum: 30.0,
                count: 2,
                average: 15.0,
                min: 10.0,
                max: 20.0,
            }
        );
    }

    #[test]
    fn test_empty_is_zeroed() {
        let none: Vec<Vec<&str>> = vec![vec![], vec!["", "abc"]];
        let stats = Aggregates::compute(none);
        assert_eq!(stats, Aggregates::default());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_numbers_and_options() {
        let rows = vec![vec![Some(-2.5), None, Some(f64::NAN)], vec![Some(4.5)]];
        let stats = Aggregates::compute(&rows);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.sum, 2.0);
        assert_eq!(stats.min, -2.5);
        assert_eq!(stats.max, 4.5);
        assert_eq!(stats.average, 1.0);
    }

    #[test]
    fn test_numeric_prefix_counts() {
        let rows = vec![vec!["12px".to_string(), "3".to_string()]];
        let stats = Aggregates::compute(&rows);
        assert_eq!(stats.sum, 15.0);
    }
}
