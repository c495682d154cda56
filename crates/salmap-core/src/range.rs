//! Value range tracking and `[0,1]` normalization.

use serde::Serialize;

/// Min/max over the known saliency values of one parsed input.
///
/// An empty value set keeps the `[0,1]` default, under which every
/// normalization yields 0 (degenerate display, not an error).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl ValueRange {
    /// Fold the range over a set of known values.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let mut range = Self {
            min: first,
            max: first,
        };
        for value in iter {
            range.min = range.min.min(value);
            range.max = range.max.max(value);
        }
        range
    }

    /// Map a raw value into `[0,1]` relative to this range.
    ///
    /// A degenerate range (max == min) normalizes everything to 0 instead of
    /// dividing by zero.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }
}

#[cfg(test)]
mod tests {
    use super::ValueRange;

    #[test]
    fn folds_min_and_max() {
        let range = ValueRange::from_values([19.6, 16.6, 18.0]);
        assert_eq!(range.min, 16.6);
        assert_eq!(range.max, 19.6);
    }

    #[test]
    fn empty_values_default_to_unit_range() {
        let range = ValueRange::from_values([]);
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 1.0);
    }

    #[test]
    fn normalizes_endpoints() {
        let range = ValueRange::from_values([16.6, 19.6]);
        assert_eq!(range.normalize(16.6), 0.0);
        assert_eq!(range.normalize(19.6), 1.0);
    }

    #[test]
    fn degenerate_range_normalizes_to_zero() {
        let range = ValueRange::from_values([4.2]);
        assert_eq!(range.min, range.max);
        assert_eq!(range.normalize(4.2), 0.0);
        assert_eq!(range.normalize(-100.0), 0.0);
    }

    #[test]
    fn single_negative_value_keeps_order_invariant() {
        let range = ValueRange::from_values([-3.0, -7.5]);
        assert_eq!(range.min, -7.5);
        assert_eq!(range.max, -3.0);
        assert_eq!(range.normalize(-3.0), 1.0);
    }
}
