use serde::{Deserialize, Serialize};

/// Immutable numeric `[start, end]` pair, normalized so `start <= end`.
///
/// A NaN bound yields the empty interval (both bounds NaN). Every operation on
/// an empty interval returns an empty interval.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Builds an interval from two bounds given in any order.
    #[must_use]
    pub fn from(a: f64, b: f64) -> Self {
        if a.is_nan() || b.is_nan() {
            return Self::empty();
        }
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            start: f64::NAN,
            end: f64::NAN,
        }
    }

    /// `(-inf, inf)`, the constraint that never rejects a translation.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: f64::NEG_INFINITY,
            end: f64::INFINITY,
        }
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.start, self.end)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start.is_nan() || self.end.is_nan()
    }

    #[must_use]
    pub fn is_unbounded(self) -> bool {
        self.start == f64::NEG_INFINITY && self.end == f64::INFINITY
    }

    /// `end - start`; NaN for the empty interval.
    #[must_use]
    pub fn measure(self) -> f64 {
        self.end - self.start
    }

    /// Shifts both bounds by `amount` without any clamping.
    #[must_use]
    pub fn translate(self, amount: f64) -> Self {
        Self::from(self.start + amount, self.end + amount)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        !self.is_empty() && value >= self.start && value <= self.end
    }

    /// Smallest interval covering both. Empty if either side is empty.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        Self::from(self.start.min(other.start), self.end.max(other.end))
    }

    /// Value comparison against explicit bounds. Empty intervals never match.
    #[must_use]
    pub fn equals_interval(self, start: f64, end: f64) -> bool {
        self.start == start && self.end == end
    }

    /// Value comparison; two empty intervals are considered equal.
    #[must_use]
    pub fn equals(self, other: Self) -> bool {
        (self.is_empty() && other.is_empty()) || self.equals_interval(other.start, other.end)
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.equals(*other)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::from(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Interval;

    #[test]
    fn construction_normalizes_order() {
        let interval = Interval::from(10.0, -5.0);
        assert_eq!(interval.bounds(), (-5.0, 10.0));
        assert_eq!(interval.measure(), 15.0);
    }

    #[test]
    fn translate_shifts_both_bounds() {
        let interval = Interval::from(0.0, 100.0).translate(-25.0);
        assert!(interval.equals_interval(-25.0, 75.0));
    }

    #[test]
    fn nan_bound_produces_empty_interval() {
        let interval = Interval::from(f64::NAN, 3.0);
        assert!(interval.is_empty());
        assert!(interval.start().is_nan());
        assert!(interval.end().is_nan());
    }

    #[test]
    fn operations_on_empty_stay_empty() {
        let empty = Interval::empty();
        assert!(empty.translate(10.0).is_empty());
        assert!(empty.measure().is_nan());
        assert!(empty.union(Interval::from(0.0, 1.0)).is_empty());
        assert!(!empty.contains(0.0));
        assert!(!empty.equals_interval(f64::NAN, f64::NAN));
        assert_eq!(empty, Interval::empty());
    }

    #[test]
    fn translating_by_nan_yields_empty() {
        assert!(Interval::from(1.0, 2.0).translate(f64::NAN).is_empty());
    }

    #[test]
    fn union_covers_both_operands() {
        let union = Interval::from(0.0, 300.0).union(Interval::from(-20.0, 120.0));
        assert!(union.equals_interval(-20.0, 300.0));
    }
}
