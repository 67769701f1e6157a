//! A fixed-point monotonic timestamp, the third canonical interval-set
//! element type.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bound::IntervalBound;

const NANOS_IN_SECOND: u32 = 1_000_000_000;

/// A monotonic timestamp with whole seconds and a subsecond nanosecond
/// component.
///
/// The nanosecond component is normalized to `0..1_000_000_000` on
/// construction, so comparison and equality are exact field-wise operations
/// and the serialized form of equal timestamps is identical. The serialized
/// layout is the `(secs, nanos)` pair; deserialization re-normalizes, so an
/// out-of-range nanosecond field in untrusted input carries over into whole
/// seconds instead of producing a value that breaks ordering.
///
/// # Examples
///
/// ```rust
/// use interval_set::Timestamp;
///
/// let t = Timestamp::new(10, 1_500_000_000);
/// assert_eq!(t.secs(), 11);
/// assert_eq!(t.subsec_nanos(), 500_000_000);
/// assert!(t < Timestamp::new(12, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, u32)", into = "(i64, u32)")]
pub struct Timestamp {
    secs: i64,
    // Invariant: nanos < NANOS_IN_SECOND
    nanos: u32,
}

impl Timestamp {
    /// The earliest representable timestamp.
    pub const MIN: Timestamp = Timestamp {
        secs: i64::MIN,
        nanos: 0,
    };

    /// The latest representable timestamp.
    pub const MAX: Timestamp = Timestamp {
        secs: i64::MAX,
        nanos: NANOS_IN_SECOND - 1,
    };

    /// Creates a timestamp from whole seconds and nanoseconds, carrying any
    /// nanosecond overflow into the seconds component. Seconds saturate at
    /// [`Timestamp::MAX`] rather than wrapping.
    pub fn new(secs: i64, nanos: u32) -> Timestamp {
        let secs = secs.saturating_add((nanos / NANOS_IN_SECOND) as i64);
        Timestamp {
            secs,
            nanos: nanos % NANOS_IN_SECOND,
        }
    }

    /// Creates a timestamp at a whole second.
    pub fn from_secs(secs: i64) -> Timestamp {
        Timestamp { secs, nanos: 0 }
    }

    /// The whole-seconds component.
    pub fn secs(&self) -> i64 {
        self.secs
    }

    /// The subsecond component in nanoseconds, always below one second.
    pub fn subsec_nanos(&self) -> u32 {
        self.nanos
    }
}

impl From<(i64, u32)> for Timestamp {
    fn from((secs, nanos): (i64, u32)) -> Timestamp {
        Timestamp::new(secs, nanos)
    }
}

impl From<Timestamp> for (i64, u32) {
    fn from(t: Timestamp) -> (i64, u32) {
        (t.secs, t.nanos)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.secs, self.nanos)
    }
}

impl IntervalBound for Timestamp {
    const DOMAIN_MIN: Self = Timestamp::MIN;
    const DOMAIN_MAX: Self = Timestamp::MAX;

    fn total_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_nanosecond_overflow() {
        let t = Timestamp::new(5, 2_000_000_001);
        assert_eq!(t.secs(), 7);
        assert_eq!(t.subsec_nanos(), 1);
        assert_eq!(t, Timestamp::new(7, 1));
    }

    #[test]
    fn ordering_is_field_wise() {
        assert!(Timestamp::new(1, 999_999_999) < Timestamp::new(2, 0));
        assert!(Timestamp::new(2, 1) > Timestamp::new(2, 0));
        assert!(Timestamp::MIN < Timestamp::from_secs(0));
        assert!(Timestamp::from_secs(0) < Timestamp::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Timestamp::new(12, 34).to_string(), "12.000000034");
    }

    #[test]
    fn serde_round_trip() {
        let t = Timestamp::new(1_234_567, 890);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[1234567,890]");
        assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), t);
    }

    #[test]
    fn deserialize_renormalizes() {
        let t: Timestamp = serde_json::from_str("[1,1500000000]").unwrap();
        assert_eq!(t, Timestamp::new(2, 500_000_000));
    }
}
