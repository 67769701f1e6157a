//! The ordered-scalar capability that interval sets are generic over.

use std::cmp::Ordering;
use std::fmt::Debug;

/// An ordered, copyable scalar usable as an interval endpoint.
///
/// Implementors supply a total order over their values and the full-range
/// sentinel domain used by [`IntervalSet::new`][crate::IntervalSet::new].
/// The sentinels must satisfy `DOMAIN_MIN <= v <= DOMAIN_MAX` for every
/// value `v` under [`total_cmp`][IntervalBound::total_cmp].
pub trait IntervalBound: Copy + PartialOrd + Debug {
    /// Lower sentinel of the full-range default domain.
    const DOMAIN_MIN: Self;

    /// Upper sentinel of the full-range default domain.
    const DOMAIN_MAX: Self;

    /// Compares two values under a total order.
    ///
    /// For integers and timestamps this is ordinary [`Ord`] comparison. For
    /// floats it is IEEE 754 `totalOrder`, which places NaN above positive
    /// infinity so a NaN endpoint clips away rather than poisoning a sort.
    fn total_cmp(&self, other: &Self) -> Ordering;
}

impl IntervalBound for i64 {
    const DOMAIN_MIN: Self = i64::MIN;
    const DOMAIN_MAX: Self = i64::MAX;

    fn total_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl IntervalBound for f64 {
    const DOMAIN_MIN: Self = f64::NEG_INFINITY;
    const DOMAIN_MAX: Self = f64::INFINITY;

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

/// Returns the smaller of `a` and `b` under the total order.
pub(crate) fn min_bound<T: IntervalBound>(a: T, b: T) -> T {
    if a.total_cmp(&b) == Ordering::Greater {
        b
    } else {
        a
    }
}

/// Returns the greater of `a` and `b` under the total order.
pub(crate) fn max_bound<T: IntervalBound>(a: T, b: T) -> T {
    if a.total_cmp(&b) == Ordering::Less {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Ordering::*;

    #[test]
    fn integer_order() {
        assert_eq!(IntervalBound::total_cmp(&1i64, &2), Less);
        assert_eq!(IntervalBound::total_cmp(&2i64, &2), Equal);
        assert_eq!(i64::DOMAIN_MIN.total_cmp(&i64::DOMAIN_MAX), Less);
    }

    #[test]
    fn float_order_is_total() {
        assert_eq!(IntervalBound::total_cmp(&1.0f64, &2.0), Less);
        assert_eq!(IntervalBound::total_cmp(&f64::NAN, &f64::INFINITY), Greater);
        assert_eq!(IntervalBound::total_cmp(&f64::NAN, &f64::NAN), Equal);
        assert_eq!(f64::DOMAIN_MIN.total_cmp(&f64::DOMAIN_MAX), Less);
    }

    #[test]
    fn min_max_helpers() {
        assert_eq!(min_bound(3i64, 7), 3);
        assert_eq!(max_bound(3i64, 7), 7);
        // NaN loses to any finite value on the low side and wins on the high
        // side, so clipping against a finite domain discards it.
        assert_eq!(min_bound(f64::NAN, 1.0), 1.0);
        assert!(max_bound(f64::NAN, 1.0).is_nan());
    }
}
