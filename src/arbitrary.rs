//! Strategies for generating arbitrary values with [`proptest`].

use proptest::collection::vec;
use proptest::prelude::*;

use crate::set::IntervalSet;
use crate::time::Timestamp;

/// Strategy to generate an arbitrary [`Timestamp`].
pub fn arbitrary_timestamp() -> impl Strategy<Value = Timestamp> {
    (any::<i64>(), 0u32..1_000_000_000).prop_map(|(secs, nanos)| Timestamp::new(secs, nanos))
}

/// Strategy to generate a canonical [`IntervalSet<i64>`] over the domain
/// `[domain.0, domain.1]`, built by folding up to `max_segments` arbitrary
/// insertions into an empty set.
pub fn arbitrary_interval_set(
    domain: (i64, i64),
    max_segments: usize,
) -> impl Strategy<Value = IntervalSet<i64>> {
    let (lo, hi) = domain;
    vec((lo..=hi, lo..=hi), 0..=max_segments).prop_map(move |pairs| {
        let mut set = IntervalSet::over(lo, hi).expect("domain is ordered");
        for (a, b) in pairs {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            set.add_interval(start, end);
        }
        set
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn timestamps_are_normalized(#[strategy(arbitrary_timestamp())] t: Timestamp) {
        assert!(t.subsec_nanos() < 1_000_000_000);
    }

    #[proptest]
    fn generated_sets_respect_their_domain(
        #[strategy(arbitrary_interval_set((-50, 50), 6))] set: IntervalSet<i64>,
    ) {
        assert_eq!(set.domain(), (-50, 50));
        for (start, end) in set.iter() {
            assert!(-50 <= start && start < end && end <= 50);
        }
    }
}
