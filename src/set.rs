//! The interval-set container and its algebra.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bound::{max_bound, min_bound, IntervalBound};

/// The error returned when a domain would be constructed or trimmed with its
/// start above its end.
///
/// Surfaced immediately at the point of construction rather than clamping,
/// so an inverted domain in the caller is never silently absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid domain: start {start:?} is greater than end {end:?}")]
pub struct InvalidDomain<T: fmt::Debug> {
    /// The offending lower bound.
    pub start: T,
    /// The offending upper bound.
    pub end: T,
}

/// A subset of a totally-ordered domain, stored as sorted, non-overlapping,
/// half-open segments.
///
/// The set owns a bounding `domain` and a list of `[start, end)` segments
/// within it. After every public operation the segments are in canonical
/// form: sorted ascending by start, pairwise non-overlapping and
/// non-touching, each non-empty and contained in the domain. The domain is
/// also the universe for [`complement`][IntervalSet::complement].
///
/// All operations are synchronous computations over owned data; cloning
/// deep-copies the segment storage, so mutating one copy never affects
/// another.
///
/// # Examples
///
/// ```rust
/// use interval_set::IntervalSet;
///
/// let mut flagged = IntervalSet::over(0i64, 100).unwrap();
/// flagged.add_interval(10, 20).add_interval(15, 30);
/// assert_eq!(flagged.segments(), &[(10, 30)]);
///
/// let valid = flagged.complement();
/// assert_eq!(valid.segments(), &[(0, 10), (30, 100)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawIntervalSet<T>")]
#[serde(bound(deserialize = "T: IntervalBound + Deserialize<'de>"))]
pub struct IntervalSet<T> {
    domain: (T, T),
    segments: Vec<(T, T)>,
}

/// The wire layout of an [`IntervalSet`]. Deserialization goes through this
/// struct so that untrusted input is domain-checked and re-canonicalized
/// before it can be observed as a set.
#[derive(Deserialize)]
struct RawIntervalSet<T> {
    domain: (T, T),
    segments: Vec<(T, T)>,
}

impl<T: IntervalBound> TryFrom<RawIntervalSet<T>> for IntervalSet<T> {
    type Error = InvalidDomain<T>;

    fn try_from(raw: RawIntervalSet<T>) -> Result<Self, Self::Error> {
        let mut set = IntervalSet::over(raw.domain.0, raw.domain.1)?;
        set.segments = raw.segments;
        set.cleanup();
        Ok(set)
    }
}

impl<T: IntervalBound> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IntervalBound> IntervalSet<T> {
    /// Creates an empty set over the element type's full-range domain
    /// (`DOMAIN_MIN` to `DOMAIN_MAX`), so the complement of an empty set
    /// covers every representable value.
    pub fn new() -> Self {
        IntervalSet {
            domain: (T::DOMAIN_MIN, T::DOMAIN_MAX),
            segments: Vec::new(),
        }
    }

    /// Creates an empty set over the domain `[start, end]`.
    ///
    /// Returns [`InvalidDomain`] if `start > end`. A point domain
    /// (`start == end`) is allowed and can never hold a segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let set = IntervalSet::over(0i64, 100).unwrap();
    /// assert_eq!(set.domain(), (0, 100));
    /// assert!(IntervalSet::over(100i64, 0).is_err());
    /// ```
    pub fn over(start: T, end: T) -> Result<Self, InvalidDomain<T>> {
        if start.total_cmp(&end) == Ordering::Greater {
            return Err(InvalidDomain { start, end });
        }
        Ok(IntervalSet {
            domain: (start, end),
            segments: Vec::new(),
        })
    }

    /// The bounding domain of the set.
    pub fn domain(&self) -> (T, T) {
        self.domain
    }

    /// The canonical segment list: sorted, non-overlapping, non-touching
    /// half-open `(start, end)` pairs within the domain.
    pub fn segments(&self) -> &[(T, T)] {
        &self.segments
    }

    /// Iterates over the canonical segments in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.segments.iter().copied()
    }

    /// Returns `true` if the set holds no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The number of segments in canonical form.
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Drops all segments, keeping the domain.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Returns `true` if `point` falls inside one of the segments. Segment
    /// starts are included, ends are excluded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::over(0i64, 100).unwrap();
    /// set.add_interval(10, 20);
    /// assert!(set.contains(10));
    /// assert!(!set.contains(20));
    /// ```
    pub fn contains(&self, point: T) -> bool {
        // Binary search for the segment starting at or before `point`.
        match self
            .segments
            .binary_search_by(|seg| seg.0.total_cmp(&point))
        {
            Ok(_) => true,
            Err(0) => false,
            Err(i) => point.total_cmp(&self.segments[i - 1].1) == Ordering::Less,
        }
    }

    /// Inserts the half-open interval `[start, end)`, clipped to the domain.
    ///
    /// Intervals that are empty after clipping are a no-op; anything the new
    /// interval overlaps or touches is coalesced with it. Chainable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::over(0i64, 100).unwrap();
    /// set.add_interval(10, 20).add_interval(15, 30).add_interval(40, 40);
    /// assert_eq!(set.segments(), &[(10, 30)]);
    /// ```
    pub fn add_interval(&mut self, start: T, end: T) -> &mut Self {
        let start = max_bound(start, self.domain.0);
        let end = min_bound(end, self.domain.1);
        if start.total_cmp(&end) == Ordering::Less {
            self.segments.push((start, end));
            self.cleanup();
        }
        self
    }

    /// Unions `other` into `self`.
    ///
    /// The domain grows to cover both operands (component-wise min of starts,
    /// max of ends); the segments become the coalesced union of both segment
    /// lists. Mutates in place and returns `self` for chaining.
    pub fn merge(&mut self, other: &Self) -> &mut Self {
        self.domain = (
            min_bound(self.domain.0, other.domain.0),
            max_bound(self.domain.1, other.domain.1),
        );
        self.segments.extend_from_slice(&other.segments);
        self.cleanup();
        self
    }

    /// Intersects `other` into `self`.
    ///
    /// The domain shrinks to the overlap of both domains; the segments become
    /// the pairwise overlaps of both segment lists, computed by a single
    /// linear merge over the two sorted lists. If the domains are disjoint
    /// the result domain degenerates to a point at the greater of the two
    /// lower bounds and the set is empty.
    pub fn intersect(&mut self, other: &Self) -> &mut Self {
        let lo = max_bound(self.domain.0, other.domain.0);
        let hi = min_bound(self.domain.1, other.domain.1);
        if lo.total_cmp(&hi) == Ordering::Greater {
            self.domain = (lo, lo);
            self.segments.clear();
            return self;
        }
        self.domain = (lo, hi);

        // Both lists are sorted and non-overlapping, so each step keeps the
        // overlap of the current pair and advances whichever side ends first.
        let mut out = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.segments.len() && j < other.segments.len() {
            let a = self.segments[i];
            let b = other.segments[j];
            let start = max_bound(a.0, b.0);
            let end = min_bound(a.1, b.1);
            if start.total_cmp(&end) == Ordering::Less {
                out.push((start, end));
            }
            if a.1.total_cmp(&b.1) == Ordering::Greater {
                j += 1;
            } else {
                i += 1;
            }
        }
        self.segments = out;
        self.cleanup();
        self
    }

    /// Returns the complement of the set over the same domain: the gaps
    /// between this set's segments and the domain boundary, with degenerate
    /// gaps dropped.
    ///
    /// Complement is an involution: over a fixed domain, complementing twice
    /// reproduces the original canonical set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::over(0i64, 100).unwrap();
    /// set.add_interval(0, 10).add_interval(20, 30);
    /// assert_eq!(set.complement().segments(), &[(10, 20), (30, 100)]);
    /// ```
    pub fn complement(&self) -> Self {
        let mut out = IntervalSet {
            domain: self.domain,
            segments: Vec::with_capacity(self.segments.len() + 1),
        };
        let mut cursor = self.domain.0;
        for &(start, end) in &self.segments {
            out.segments.push((cursor, start));
            cursor = end;
        }
        out.segments.push((cursor, self.domain.1));
        out.cleanup();
        out
    }

    /// Removes from `self` every sub-range covered by one of `other`'s
    /// segments.
    ///
    /// `self`'s domain is unchanged: subtraction only removes what `other`
    /// actually covers, so parts of `self` outside `other`'s domain are
    /// unaffected. This keeps `a == (a - b) + (a * b)` exact for operands
    /// sharing a domain.
    pub fn subtract(&mut self, other: &Self) -> &mut Self {
        let mut out = Vec::with_capacity(self.segments.len());
        let mut j = 0;
        for &(start, end) in &self.segments {
            let mut cursor = start;
            // Holes ending at or before this segment can never matter again.
            while j < other.segments.len()
                && other.segments[j].1.total_cmp(&cursor) != Ordering::Greater
            {
                j += 1;
            }
            let mut k = j;
            while k < other.segments.len() && other.segments[k].0.total_cmp(&end) == Ordering::Less
            {
                let (hole_start, hole_end) = other.segments[k];
                if cursor.total_cmp(&hole_start) == Ordering::Less {
                    out.push((cursor, hole_start));
                }
                cursor = max_bound(cursor, hole_end);
                if hole_end.total_cmp(&end) != Ordering::Less {
                    break;
                }
                k += 1;
            }
            if cursor.total_cmp(&end) == Ordering::Less {
                out.push((cursor, end));
            }
        }
        self.segments = out;
        self.cleanup();
        self
    }

    /// Shrinks the domain to `[start, end]` intersected with the current
    /// domain and clips every segment into it, dropping segments that fall
    /// wholly outside.
    ///
    /// Returns [`InvalidDomain`] if `start > end`. If the requested range
    /// does not overlap the current domain, the domain degenerates to a
    /// point at the greater of the two lower bounds and the set is emptied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use interval_set::IntervalSet;
    ///
    /// let mut set = IntervalSet::over(0i64, 100).unwrap();
    /// set.add_interval(0, 20);
    /// set.trim_to(5, 15).unwrap();
    /// assert_eq!(set.domain(), (5, 15));
    /// assert_eq!(set.segments(), &[(5, 15)]);
    /// ```
    pub fn trim_to(&mut self, start: T, end: T) -> Result<(), InvalidDomain<T>> {
        if start.total_cmp(&end) == Ordering::Greater {
            return Err(InvalidDomain { start, end });
        }
        let lo = max_bound(self.domain.0, start);
        let hi = min_bound(self.domain.1, end);
        self.domain = if lo.total_cmp(&hi) == Ordering::Greater {
            (lo, lo)
        } else {
            (lo, hi)
        };
        self.cleanup();
        Ok(())
    }

    /// Restores canonical form: clips every segment to the domain, drops
    /// empty segments, sorts by start and coalesces any pair that overlaps
    /// or touches.
    ///
    /// Idempotent, and a no-op on an already-canonical set. Every mutating
    /// operation invokes this before returning, so callers only ever observe
    /// canonical sets.
    pub fn cleanup(&mut self) {
        let (lo, hi) = self.domain;
        let mut segments = std::mem::take(&mut self.segments);
        for seg in &mut segments {
            seg.0 = max_bound(seg.0, lo);
            seg.1 = min_bound(seg.1, hi);
        }
        segments.retain(|&(start, end)| start.total_cmp(&end) == Ordering::Less);
        segments.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

        for (start, end) in segments {
            match self.segments.last_mut() {
                // Coalesce when the next segment starts at or before the end
                // of the previous one.
                Some(last) if start.total_cmp(&last.1) != Ordering::Greater => {
                    last.1 = max_bound(last.1, end);
                }
                _ => self.segments.push((start, end)),
            }
        }
    }
}

impl<T: IntervalBound + fmt::Display> fmt::Display for IntervalSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SHOWN: usize = 4;
        write!(
            f,
            "IntervalSet over [{}, {}], {} segment{}",
            self.domain.0,
            self.domain.1,
            self.segments.len(),
            if self.segments.len() == 1 { "" } else { "s" },
        )?;
        if !self.segments.is_empty() {
            write!(f, ":")?;
            for &(start, end) in self.segments.iter().take(SHOWN) {
                write!(f, " [{start}, {end})")?;
            }
            if self.segments.len() > SHOWN {
                write!(f, " ...")?;
            }
        }
        Ok(())
    }
}

impl<T: IntervalBound> Neg for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn neg(self) -> IntervalSet<T> {
        self.complement()
    }
}

impl<T: IntervalBound> Neg for IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn neg(self) -> IntervalSet<T> {
        self.complement()
    }
}

impl<T: IntervalBound> AddAssign<&IntervalSet<T>> for IntervalSet<T> {
    fn add_assign(&mut self, rhs: &IntervalSet<T>) {
        self.merge(rhs);
    }
}

impl<T: IntervalBound> SubAssign<&IntervalSet<T>> for IntervalSet<T> {
    fn sub_assign(&mut self, rhs: &IntervalSet<T>) {
        self.subtract(rhs);
    }
}

impl<T: IntervalBound> Add<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn add(self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
        let mut out = self.clone();
        out.merge(rhs);
        out
    }
}

impl<T: IntervalBound> Sub<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn sub(self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
        let mut out = self.clone();
        out.subtract(rhs);
        out
    }
}

impl<T: IntervalBound> Mul<&IntervalSet<T>> for &IntervalSet<T> {
    type Output = IntervalSet<T>;

    fn mul(self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
        let mut out = self.clone();
        out.intersect(rhs);
        out
    }
}
