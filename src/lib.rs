//! Interval sets over a totally-ordered domain.
//!
//! An [`IntervalSet`] represents a subset of a 1-D ordered domain as a
//! sorted list of non-overlapping, half-open `[start, end)` segments,
//! together with the set algebra over such subsets: union
//! ([`merge`][IntervalSet::merge]), intersection
//! ([`intersect`][IntervalSet::intersect]), difference
//! ([`subtract`][IntervalSet::subtract]) and domain-aware
//! [`complement`][IntervalSet::complement]. The usual use is representing
//! time- or sample-indexed masks over a 1-D signal ("flagged" or "valid"
//! ranges) and combining such masks algebraically.
//!
//! Every public operation leaves the segment list in canonical form:
//! sorted, non-overlapping, non-touching, non-empty and contained in the
//! set's bounding domain. The domain doubles as the universe for
//! complement, and sets serialize structurally as their
//! `{domain, segments}` pair.
//!
//! Three element types are supported out of the box, each a distinct
//! serializable specialization: `i64` ([`IntervalSetInt`]), `f64` with IEEE
//! total ordering ([`IntervalSetFloat`]) and the fixed-point [`Timestamp`]
//! ([`IntervalSetTime`]). Any other ordered copyable scalar can opt in by
//! implementing [`IntervalBound`].
//!
//! ```
//! use interval_set::IntervalSet;
//!
//! let mut flagged = IntervalSet::over(0i64, 100).unwrap();
//! flagged.add_interval(10, 20).add_interval(15, 30);
//! assert_eq!(flagged.segments(), &[(10, 30)]);
//!
//! let mut valid = flagged.complement();
//! assert_eq!(valid.segments(), &[(0, 10), (30, 100)]);
//!
//! valid.trim_to(5, 95).unwrap();
//! assert_eq!(valid.segments(), &[(5, 10), (30, 95)]);
//! ```
#![deny(missing_docs)]

pub mod arbitrary;
mod bound;
mod set;
mod time;

pub use bound::IntervalBound;
pub use set::{IntervalSet, InvalidDomain};
pub use time::Timestamp;

/// An interval set over 64-bit signed integers (e.g. sample indices).
pub type IntervalSetInt = IntervalSet<i64>;

/// An interval set over double-precision floats.
pub type IntervalSetFloat = IntervalSet<f64>;

/// An interval set over monotonic [`Timestamp`]s.
pub type IntervalSetTime = IntervalSet<Timestamp>;
