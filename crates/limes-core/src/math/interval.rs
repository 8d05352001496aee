// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::math::limit::{Cut, Limit, Side};
use smallvec::{SmallVec, smallvec};
use std::{
    cmp::{max, min},
    ops::{BitAnd, BitOr, BitXor, Bound, Sub},
};

/// The error returned when querying an interval whose lower limit lies above
/// its upper limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid interval: the lower limit exceeds the upper limit")]
pub struct InvalidIntervalError;

/// A contiguous range of values of an ordered type `T`.
///
/// Each side is bounded by a [`Limit`]: closed, open, or unbounded. The
/// interval owns both limits and is never mutated; every set operation
/// returns new intervals.
///
/// # Validity
///
/// An interval is *valid* when, with both sides bounded, the lower value does
/// not exceed the upper value. Construction does not enforce this. Set
/// operations such as [`Interval::intersect`] may produce invalid or empty
/// intervals, and [`Interval::contains`] rejects invalid ones.
///
/// # Examples
///
/// ```rust
/// # use limes_core::math::interval::Interval;
///
/// let iv = Interval::closed_open(2, 5);
/// assert_eq!(iv.contains(&2), Ok(true));
/// assert_eq!(iv.contains(&5), Ok(false));
/// assert_eq!(iv.to_string(), "[2, 5)");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: Limit<T>,
    upper: Limit<T>,
}

impl<T> Interval<T> {
    /// Creates an interval from two limits without validating them.
    #[inline]
    pub const fn new(lower: Limit<T>, upper: Limit<T>) -> Self {
        Self { lower, upper }
    }

    /// `[lower, upper]`
    #[inline]
    pub const fn closed(lower: T, upper: T) -> Self {
        Self::new(Limit::Closed(lower), Limit::Closed(upper))
    }

    /// `(lower, upper)`
    #[inline]
    pub const fn open(lower: T, upper: T) -> Self {
        Self::new(Limit::Open(lower), Limit::Open(upper))
    }

    /// `[lower, upper)`
    #[inline]
    pub const fn closed_open(lower: T, upper: T) -> Self {
        Self::new(Limit::Closed(lower), Limit::Open(upper))
    }

    /// `(lower, upper]`
    #[inline]
    pub const fn open_closed(lower: T, upper: T) -> Self {
        Self::new(Limit::Open(lower), Limit::Closed(upper))
    }

    /// `[lower, +inf)`
    #[inline]
    pub const fn at_least(lower: T) -> Self {
        Self::new(Limit::Closed(lower), Limit::Unbounded)
    }

    /// `(lower, +inf)`
    #[inline]
    pub const fn greater_than(lower: T) -> Self {
        Self::new(Limit::Open(lower), Limit::Unbounded)
    }

    /// `(-inf, upper]`
    #[inline]
    pub const fn at_most(upper: T) -> Self {
        Self::new(Limit::Unbounded, Limit::Closed(upper))
    }

    /// `(-inf, upper)`
    #[inline]
    pub const fn less_than(upper: T) -> Self {
        Self::new(Limit::Unbounded, Limit::Open(upper))
    }

    /// `(-inf, +inf)`
    #[inline]
    pub const fn unbounded() -> Self {
        Self::new(Limit::Unbounded, Limit::Unbounded)
    }

    /// `[value, value]`
    #[inline]
    pub fn singleton(value: T) -> Self
    where
        T: Clone,
    {
        Self::closed(value.clone(), value)
    }

    #[inline]
    pub const fn lower(&self) -> &Limit<T> {
        &self.lower
    }

    #[inline]
    pub const fn upper(&self) -> &Limit<T> {
        &self.upper
    }

    #[inline]
    pub fn into_limits(self) -> (Limit<T>, Limit<T>) {
        (self.lower, self.upper)
    }

    /// Returns `true` if both sides are bounded.
    #[inline]
    pub const fn is_bounded(&self) -> bool {
        self.lower.is_bounded() && self.upper.is_bounded()
    }

    #[inline]
    pub const fn is_left_bounded(&self) -> bool {
        self.lower.is_bounded()
    }

    #[inline]
    pub const fn is_right_bounded(&self) -> bool {
        self.upper.is_bounded()
    }

    #[inline]
    pub const fn is_left_unbounded(&self) -> bool {
        self.lower.is_unbounded()
    }

    #[inline]
    pub const fn is_right_unbounded(&self) -> bool {
        self.upper.is_unbounded()
    }

    /// Returns `true` if at least one side is unbounded.
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        !self.is_bounded()
    }

    #[inline]
    pub const fn is_left_closed(&self) -> bool {
        self.lower.is_closed()
    }

    #[inline]
    pub const fn is_right_closed(&self) -> bool {
        self.upper.is_closed()
    }

    /// Returns `true` if both limits are closed.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.is_left_closed() && self.is_right_closed()
    }

    /// Returns `true` if neither limit is closed. Unbounded sides count as open.
    #[inline]
    pub const fn is_open(&self) -> bool {
        !self.is_left_closed() && !self.is_right_closed()
    }
}

impl<T> Interval<T>
where
    T: Ord,
{
    /// The position of the lower limit on the extended line.
    #[inline]
    pub fn lower_cut(&self) -> Cut<'_, T> {
        self.lower.cut(Side::Lower)
    }

    /// The position of the upper limit on the extended line.
    #[inline]
    pub fn upper_cut(&self) -> Cut<'_, T> {
        self.upper.cut(Side::Upper)
    }

    /// Returns `true` unless both sides are bounded and the lower value
    /// exceeds the upper value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// assert!(Interval::closed(2, 5).is_valid());
    /// assert!(Interval::open(5, 5).is_valid());
    /// assert!(!Interval::closed(5, 2).is_valid());
    /// ```
    #[inline]
    pub fn is_valid(&self) -> bool {
        match (self.lower.value(), self.upper.value()) {
            (Some(lower), Some(upper)) => lower <= upper,
            _ => true,
        }
    }

    /// Returns `true` if no value of `T` lies in the interval.
    ///
    /// Invalid intervals are empty. So are `(v, v)`, `[v, v)` and `(v, v]`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lower_cut() >= self.upper_cut()
    }

    /// Returns `true` for `[v, v]`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!((&self.lower, &self.upper), (Limit::Closed(a), Limit::Closed(b)) if a == b)
    }

    /// Returns whether `value` lies within the interval, honoring the kind of
    /// each limit.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIntervalError`] if the interval is not valid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::{Interval, InvalidIntervalError};
    ///
    /// let iv = Interval::open_closed(2, 5);
    /// assert_eq!(iv.contains(&2), Ok(false));
    /// assert_eq!(iv.contains(&5), Ok(true));
    /// assert_eq!(Interval::closed(5, 2).contains(&3), Err(InvalidIntervalError));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> Result<bool, InvalidIntervalError> {
        if !self.is_valid() {
            return Err(InvalidIntervalError);
        }
        Ok(self.contains_point(value))
    }

    pub(crate) fn contains_point(&self, value: &T) -> bool {
        let above_lower = match &self.lower {
            Limit::Unbounded => true,
            Limit::Closed(lower) => lower <= value,
            Limit::Open(lower) => lower < value,
        };
        let below_upper = match &self.upper {
            Limit::Unbounded => true,
            Limit::Closed(upper) => value <= upper,
            Limit::Open(upper) => value < upper,
        };
        above_lower && below_upper
    }

    /// Returns `true` if every limit of `self` lies within the limits of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// assert!(Interval::open(2, 5).is_subset_of(&Interval::closed(2, 5)));
    /// assert!(!Interval::closed(2, 5).is_subset_of(&Interval::open(2, 5)));
    /// assert!(Interval::closed(2, 5).is_subset_of(&Interval::at_least(0)));
    /// ```
    #[inline]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.lower_cut() >= other.lower_cut() && self.upper_cut() <= other.upper_cut()
    }

    #[inline]
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        self.is_subset_of(other) && self != other
    }

    #[inline]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    #[inline]
    pub fn is_proper_superset_of(&self, other: &Self) -> bool {
        other.is_proper_subset_of(self)
    }

    /// Returns `true` if the intervals share at least one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// let a = Interval::closed(2, 5);
    /// assert!(a.overlaps(&Interval::closed(5, 8))); // Share 5
    /// assert!(!a.overlaps(&Interval::open(5, 8)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.lower_cut() < other.upper_cut()
            && other.lower_cut() < self.upper_cut()
    }

    /// Returns `true` if the intervals share more than a single boundary point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// let a = Interval::closed(2, 5);
    /// assert!(a.properly_overlaps(&Interval::closed(4, 8)));
    /// assert!(!a.properly_overlaps(&Interval::closed(5, 8)));
    /// ```
    pub fn properly_overlaps(&self, other: &Self) -> bool {
        if !self.overlaps(other) {
            return false;
        }
        let lower = max(self.lower_cut(), other.lower_cut());
        let upper = min(self.upper_cut(), other.upper_cut());
        !matches!((lower, upper), (Cut::Below(a), Cut::Above(b)) if a == b)
    }

    /// Returns `true` if the intervals touch without sharing a value, such as
    /// `[2, 5)` and `[5, 8]`.
    #[inline]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (self.upper_cut() == other.lower_cut() || other.upper_cut() == self.lower_cut())
    }

    /// Returns `true` if the intervals overlap or are adjacent, i.e. their
    /// union is a single interval.
    #[inline]
    pub fn is_connected(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.lower_cut() <= other.upper_cut()
            && other.lower_cut() <= self.upper_cut()
    }
}

impl<T> Interval<T>
where
    T: Ord + Clone,
{
    #[inline]
    fn from_cuts(lower: Cut<'_, T>, upper: Cut<'_, T>) -> Self {
        Self::new(lower.into_limit(Side::Lower), upper.into_limit(Side::Upper))
    }

    /// Returns the smallest interval covering both operands.
    ///
    /// The result is computed unconditionally. For operands that are not
    /// connected it also covers the gap between them; use
    /// [`Interval::try_union`] when that matters. At equal values a closed
    /// limit wins over an open one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// let a = Interval::closed(2, 5);
    /// assert_eq!(a.union(&Interval::closed(3, 8)), Interval::closed(2, 8));
    /// assert_eq!(
    ///     Interval::open(2, 5).union(&Interval::closed_open(2, 5)),
    ///     Interval::closed_open(2, 5)
    /// );
    /// ```
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_cuts(
            min(self.lower_cut(), other.lower_cut()),
            max(self.upper_cut(), other.upper_cut()),
        )
    }

    /// Returns the union if it is a single contiguous interval.
    ///
    /// Empty operands do not contribute to the union.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// let a = Interval::closed_open(0, 10);
    /// assert_eq!(a.try_union(&Interval::closed(10, 20)), Some(Interval::closed(0, 20)));
    /// assert_eq!(a.try_union(&Interval::closed(12, 20)), None);
    /// ```
    pub fn try_union(&self, other: &Self) -> Option<Self> {
        if other.is_empty() {
            return Some(self.clone());
        }
        if self.is_empty() {
            return Some(other.clone());
        }
        if self.is_connected(other) {
            Some(self.union(other))
        } else {
            None
        }
    }

    /// Returns the region shared by both operands.
    ///
    /// The result is empty, and possibly invalid, when the operands do not
    /// overlap; callers check [`Interval::is_valid`] or [`Interval::is_empty`]
    /// afterwards. At equal values an open limit wins over a closed one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// let a = Interval::closed(2, 5);
    /// assert_eq!(a.intersect(&Interval::closed(3, 8)), Interval::closed(3, 5));
    /// assert!(!a.intersect(&Interval::closed(7, 8)).is_valid());
    /// ```
    #[inline]
    pub fn intersect(&self, other: &Self) -> Self {
        Self::from_cuts(
            max(self.lower_cut(), other.lower_cut()),
            min(self.upper_cut(), other.upper_cut()),
        )
    }

    /// Returns the intersection, or `None` if it is empty.
    #[inline]
    pub fn try_intersect(&self, other: &Self) -> Option<Self> {
        let lower = max(self.lower_cut(), other.lower_cut());
        let upper = min(self.upper_cut(), other.upper_cut());
        if lower < upper {
            Some(Self::from_cuts(lower, upper))
        } else {
            None
        }
    }

    /// Removes every value of `other` from `self`.
    ///
    /// # Returns
    ///
    /// A `SmallVec` of non-empty intervals in ascending order:
    /// * 0 intervals: If `other` covers `self`, or `self` is empty.
    /// * 1 interval: If `other` clips one side of `self` or misses it.
    /// * 2 intervals: If `other` lies strictly inside `self`, splitting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// let a = Interval::closed(0, 10);
    /// let diff = a.subtract(&Interval::closed(4, 6));
    /// assert_eq!(diff.as_slice(), &[Interval::closed_open(0, 4), Interval::open_closed(6, 10)]);
    /// ```
    pub fn subtract(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if self.is_empty() {
            return SmallVec::new();
        }
        if !self.overlaps(other) {
            return smallvec![self.clone()];
        }

        let mut result = SmallVec::new();
        if self.lower_cut() < other.lower_cut() {
            result.push(Self::from_cuts(self.lower_cut(), other.lower_cut()));
        }
        if other.upper_cut() < self.upper_cut() {
            result.push(Self::from_cuts(other.upper_cut(), self.upper_cut()));
        }
        result
    }

    /// Returns the values that lie in exactly one of the operands, as
    /// non-empty intervals in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// let diff = Interval::closed(2, 5).symmetric_difference(&Interval::closed(3, 8));
    /// assert_eq!(diff.as_slice(), &[Interval::closed_open(2, 3), Interval::open_closed(5, 8)]);
    /// ```
    pub fn symmetric_difference(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if self.overlaps(other) {
            return self.union(other).subtract(&self.intersect(other));
        }

        let (first, second) = if other.lower_cut() < self.lower_cut() {
            (other, self)
        } else {
            (self, other)
        };
        [first, second]
            .into_iter()
            .filter(|iv| !iv.is_empty())
            .cloned()
            .collect()
    }

    /// Returns the region strictly between two disconnected intervals.
    ///
    /// Returns `None` if the intervals overlap, are adjacent, or either is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// let a = Interval::closed(0, 5);
    /// let b = Interval::closed(10, 15);
    /// assert_eq!(a.gap(&b), Some(Interval::open(5, 10)));
    /// assert_eq!(b.gap(&a), Some(Interval::open(5, 10)));
    /// ```
    pub fn gap(&self, other: &Self) -> Option<Self> {
        if self.is_empty() || other.is_empty() || self.is_connected(other) {
            return None;
        }
        if self.upper_cut() < other.lower_cut() {
            Some(Self::from_cuts(self.upper_cut(), other.lower_cut()))
        } else {
            Some(Self::from_cuts(other.upper_cut(), self.lower_cut()))
        }
    }
}

impl<T> BitAnd for &Interval<T>
where
    T: Ord + Clone,
{
    type Output = Interval<T>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<T> BitOr for &Interval<T>
where
    T: Ord + Clone,
{
    type Output = Interval<T>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> Sub for &Interval<T>
where
    T: Ord + Clone,
{
    type Output = SmallVec<[Interval<T>; 2]>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<T> BitXor for &Interval<T>
where
    T: Ord + Clone,
{
    type Output = SmallVec<[Interval<T>; 2]>;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T> Default for Interval<T> {
    #[inline]
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> std::fmt::Debug for Interval<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interval")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

/// Formats as `[2, 5)`. An unbounded side prints no value: `(, 5]`, `[2, )`.
impl<T> std::fmt::Display for Interval<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.lower {
            Limit::Unbounded => f.write_str("(")?,
            Limit::Closed(v) => write!(f, "[{v}")?,
            Limit::Open(v) => write!(f, "({v}")?,
        }
        f.write_str(", ")?;
        match &self.upper {
            Limit::Unbounded => f.write_str(")"),
            Limit::Closed(v) => write!(f, "{v}]"),
            Limit::Open(v) => write!(f, "{v})"),
        }
    }
}

impl<T> std::ops::RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        match &self.lower {
            Limit::Unbounded => Bound::Unbounded,
            Limit::Closed(v) => Bound::Included(v),
            Limit::Open(v) => Bound::Excluded(v),
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        match &self.upper {
            Limit::Unbounded => Bound::Unbounded,
            Limit::Closed(v) => Bound::Included(v),
            Limit::Open(v) => Bound::Excluded(v),
        }
    }
}

impl<T> From<std::ops::Range<T>> for Interval<T> {
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::closed_open(range.start, range.end)
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for Interval<T> {
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

impl<T> From<std::ops::RangeFrom<T>> for Interval<T> {
    #[inline]
    fn from(range: std::ops::RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T> From<std::ops::RangeTo<T>> for Interval<T> {
    #[inline]
    fn from(range: std::ops::RangeTo<T>) -> Self {
        Self::less_than(range.end)
    }
}

impl<T> From<std::ops::RangeToInclusive<T>> for Interval<T> {
    #[inline]
    fn from(range: std::ops::RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T> From<std::ops::RangeFull> for Interval<T> {
    #[inline]
    fn from(_: std::ops::RangeFull) -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::RangeBounds;

    type Iv = Interval<i32>;

    #[test]
    fn test_construction() {
        let iv = Iv::closed_open(2, 5);
        assert_eq!(iv.lower(), &Limit::Closed(2));
        assert_eq!(iv.upper(), &Limit::Open(5));
        assert_eq!(iv.into_limits(), (Limit::Closed(2), Limit::Open(5)));
        assert_eq!(Iv::singleton(4), Iv::closed(4, 4));
        assert_eq!(Iv::default(), Iv::unbounded());
    }

    #[test]
    fn test_boundedness_flags() {
        let bounded = Iv::closed(1, 2);
        assert!(bounded.is_bounded());
        assert!(!bounded.is_unbounded());

        let right = Iv::at_least(2);
        assert!(right.is_left_bounded());
        assert!(right.is_right_unbounded());
        assert!(right.is_unbounded());
        assert!(!right.is_bounded());

        let left = Iv::less_than(5);
        assert!(left.is_left_unbounded());
        assert!(left.is_right_bounded());

        let all = Iv::unbounded();
        assert!(all.is_left_unbounded() && all.is_right_unbounded());
    }

    #[test]
    fn test_closedness_flags() {
        assert!(Iv::closed(1, 2).is_closed());
        assert!(!Iv::closed(1, 2).is_open());
        assert!(Iv::open(1, 2).is_open());
        assert!(Iv::unbounded().is_open());
        assert!(Iv::greater_than(1).is_open());
        let half = Iv::closed_open(1, 2);
        assert!(half.is_left_closed());
        assert!(!half.is_right_closed());
        assert!(!half.is_closed() && !half.is_open());
    }

    #[test]
    fn test_validity_and_emptiness() {
        assert!(Iv::closed(2, 2).is_valid());
        assert!(!Iv::closed(2, 2).is_empty());
        assert!(Iv::closed(2, 2).is_degenerate());

        for iv in [Iv::open(2, 2), Iv::closed_open(2, 2), Iv::open_closed(2, 2)] {
            assert!(iv.is_valid());
            assert!(iv.is_empty());
            assert!(!iv.is_degenerate());
        }

        let invalid = Iv::closed(5, 2);
        assert!(!invalid.is_valid());
        assert!(invalid.is_empty());

        assert!(Iv::at_least(i32::MAX).is_valid());
        assert!(!Iv::unbounded().is_empty());
    }

    #[test]
    fn test_contains_boundaries() {
        let cases = [
            (Iv::closed(2, 5), true, true),
            (Iv::closed_open(2, 5), true, false),
            (Iv::open_closed(2, 5), false, true),
            (Iv::open(2, 5), false, false),
        ];
        for (iv, at_lower, at_upper) in cases {
            assert_eq!(iv.contains(&2), Ok(at_lower), "{iv}");
            assert_eq!(iv.contains(&5), Ok(at_upper), "{iv}");
            assert_eq!(iv.contains(&3), Ok(true), "{iv}");
            assert_eq!(iv.contains(&1), Ok(false), "{iv}");
            assert_eq!(iv.contains(&6), Ok(false), "{iv}");
        }
    }

    #[test]
    fn test_contains_unbounded() {
        let iv = Iv::at_least(2);
        assert_eq!(iv.contains(&i32::MAX), Ok(true));
        assert_eq!(iv.contains(&1), Ok(false));
        assert_eq!(Iv::unbounded().contains(&i32::MIN), Ok(true));
        assert_eq!(Iv::less_than(0).contains(&0), Ok(false));
    }

    #[test]
    fn test_contains_invalid() {
        assert_eq!(Iv::closed(5, 2).contains(&3), Err(InvalidIntervalError));
    }

    #[test]
    fn test_subset_and_superset() {
        let outer = Iv::closed(0, 10);
        let inner = Iv::open(2, 8);

        assert!(inner.is_subset_of(&outer));
        assert!(inner.is_proper_subset_of(&outer));
        assert!(outer.is_superset_of(&inner));
        assert!(outer.is_proper_superset_of(&inner));

        // Equality is a subset but not a proper one
        assert!(outer.is_subset_of(&outer));
        assert!(!outer.is_proper_subset_of(&outer));
        assert!(outer.is_superset_of(&outer));
        assert!(!outer.is_proper_superset_of(&outer));

        // Same values, different kinds
        assert!(Iv::open(0, 10).is_proper_subset_of(&outer));
        assert!(Iv::closed_open(0, 10).is_proper_subset_of(&outer));
        assert!(!outer.is_subset_of(&Iv::open(0, 10)));

        // Unbounded sides
        assert!(outer.is_subset_of(&Iv::unbounded()));
        assert!(Iv::at_least(3).is_subset_of(&Iv::greater_than(2)));
        assert!(!Iv::at_least(2).is_subset_of(&Iv::greater_than(2)));
        assert!(!Iv::unbounded().is_subset_of(&outer));
    }

    #[test]
    fn test_overlaps() {
        let a = Iv::closed(2, 5);
        assert!(a.overlaps(&Iv::closed(3, 8)));
        assert!(a.overlaps(&Iv::closed(5, 8)));
        assert!(!a.overlaps(&Iv::open(5, 8)));
        assert!(!Iv::closed_open(2, 5).overlaps(&Iv::closed(5, 8)));
        assert!(!a.overlaps(&Iv::closed(6, 8)));
        assert!(a.overlaps(&Iv::unbounded()));
        // Empty intervals share nothing
        assert!(!a.overlaps(&Iv::open(3, 3)));
        // Symmetric
        assert!(Iv::closed(5, 8).overlaps(&a));
    }

    #[test]
    fn test_properly_overlaps() {
        let a = Iv::closed(2, 5);
        assert!(a.properly_overlaps(&Iv::closed(3, 8)));
        assert!(!a.properly_overlaps(&Iv::closed(5, 8)));
        assert!(!Iv::closed(5, 8).properly_overlaps(&a));
        assert!(!a.properly_overlaps(&Iv::open(5, 8)));
        assert!(a.properly_overlaps(&a));
        assert!(!Iv::singleton(3).properly_overlaps(&a));
    }

    #[test]
    fn test_adjacent_and_connected() {
        let a = Iv::closed_open(2, 5);
        assert!(a.is_adjacent(&Iv::closed(5, 8)));
        assert!(a.is_connected(&Iv::closed(5, 8)));
        assert!(Iv::closed(2, 5).is_adjacent(&Iv::open_closed(5, 8)));
        assert!(!a.is_adjacent(&Iv::open(5, 8)));
        assert!(!a.is_connected(&Iv::open(5, 8)));
        assert!(!Iv::closed(2, 5).is_adjacent(&Iv::closed(5, 8)));
        assert!(Iv::closed(2, 5).is_connected(&Iv::closed(5, 8)));
    }

    #[test]
    fn test_union() {
        assert_eq!(Iv::closed(2, 5).union(&Iv::closed(3, 8)), Iv::closed(2, 8));
        assert_eq!(Iv::closed(3, 8).union(&Iv::closed(2, 5)), Iv::closed(2, 8));
        // Closed wins outward
        assert_eq!(Iv::open(2, 5).union(&Iv::closed(2, 5)), Iv::closed(2, 5));
        assert_eq!(Iv::open(2, 5).union(&Iv::at_least(4)), Iv::greater_than(2));
        // Permissive across a gap
        assert_eq!(Iv::closed(0, 1).union(&Iv::closed(5, 6)), Iv::closed(0, 6));
    }

    #[test]
    fn test_try_union() {
        let a = Iv::closed_open(0, 10);
        assert_eq!(a.try_union(&Iv::closed(10, 20)), Some(Iv::closed(0, 20)));
        assert_eq!(a.try_union(&Iv::open(10, 20)), None);
        assert_eq!(a.try_union(&Iv::open(4, 4)), Some(a));
        assert_eq!(Iv::open(4, 4).try_union(&a), Some(a));
    }

    #[test]
    fn test_intersect() {
        assert_eq!(Iv::closed(2, 5).intersect(&Iv::closed(3, 8)), Iv::closed(3, 5));
        // Open wins inward
        assert_eq!(Iv::closed(2, 5).intersect(&Iv::open(2, 5)), Iv::open(2, 5));
        assert_eq!(Iv::at_least(2).intersect(&Iv::less_than(5)), Iv::closed_open(2, 5));

        let disjoint = Iv::closed(2, 3).intersect(&Iv::closed(5, 8));
        assert_eq!(disjoint, Iv::closed(5, 3));
        assert!(!disjoint.is_valid());

        let a = Iv::open_closed(1, 9);
        assert_eq!(a.intersect(&a), a);
    }

    #[test]
    fn test_try_intersect() {
        let a = Iv::closed(2, 5);
        assert_eq!(a.try_intersect(&Iv::closed(5, 8)), Some(Iv::singleton(5)));
        assert_eq!(a.try_intersect(&Iv::open(5, 8)), None);
        assert_eq!(a.try_intersect(&Iv::closed(9, 10)), None);
    }

    #[test]
    fn test_subtract() {
        let base = Iv::closed(0, 10);

        // 1. Disjoint (No effect)
        assert_eq!(base.subtract(&Iv::closed(12, 15)).as_slice(), &[base]);

        // 2. Full cover (Empty result)
        assert!(base.subtract(&Iv::closed(-5, 15)).is_empty());
        assert!(base.subtract(&base).is_empty());

        // 3. Clip right
        assert_eq!(base.subtract(&Iv::closed(8, 15)).as_slice(), &[Iv::closed_open(0, 8)]);

        // 4. Clip left
        assert_eq!(base.subtract(&Iv::less_than(2)).as_slice(), &[Iv::closed(2, 10)]);

        // 5. Split
        assert_eq!(
            base.subtract(&Iv::open(4, 6)).as_slice(),
            &[Iv::closed(0, 4), Iv::closed(6, 10)]
        );

        // 6. Only the boundary point removed
        assert_eq!(base.subtract(&Iv::singleton(10)).as_slice(), &[Iv::closed_open(0, 10)]);
        assert_eq!(
            Iv::unbounded().subtract(&Iv::singleton(0)).as_slice(),
            &[Iv::less_than(0), Iv::greater_than(0)]
        );

        // 7. Empty minuend
        assert!(Iv::open(3, 3).subtract(&base).is_empty());
    }

    #[test]
    fn test_symmetric_difference() {
        let a = Iv::closed(2, 5);
        let b = Iv::closed(3, 8);
        let expected = [Iv::closed_open(2, 3), Iv::open_closed(5, 8)];
        assert_eq!(a.symmetric_difference(&b).as_slice(), &expected);
        assert_eq!(b.symmetric_difference(&a).as_slice(), &expected);

        assert!(a.symmetric_difference(&a).is_empty());

        let far = Iv::closed(10, 12);
        assert_eq!(far.symmetric_difference(&a).as_slice(), &[a, far]);

        assert_eq!(
            a.symmetric_difference(&Iv::closed(2, 8)).as_slice(),
            &[Iv::open_closed(5, 8)]
        );
    }

    #[test]
    fn test_gap() {
        let a = Iv::closed(0, 5);
        assert_eq!(a.gap(&Iv::closed(10, 15)), Some(Iv::open(5, 10)));
        assert_eq!(Iv::closed_open(0, 5).gap(&Iv::open(5, 8)), Some(Iv::singleton(5)));
        assert_eq!(a.gap(&Iv::open(5, 8)), None);
        assert_eq!(a.gap(&Iv::closed(4, 6)), None);
    }

    #[test]
    fn test_operators() {
        let a = Iv::closed(2, 5);
        let b = Iv::closed(3, 8);
        assert_eq!(&a & &b, a.intersect(&b));
        assert_eq!(&a | &b, a.union(&b));
        assert_eq!(&a - &b, a.subtract(&b));
        assert_eq!(&a ^ &b, a.symmetric_difference(&b));
    }

    #[test]
    fn test_traits_display_debug() {
        assert_eq!(Iv::closed_open(10, 20).to_string(), "[10, 20)");
        assert_eq!(Iv::open_closed(-1, 1).to_string(), "(-1, 1]");
        assert_eq!(Iv::at_least(2).to_string(), "[2, )");
        assert_eq!(Iv::less_than(5).to_string(), "(, 5)");
        assert_eq!(Iv::unbounded().to_string(), "(, )");
        assert_eq!(
            format!("{:?}", Iv::closed_open(10, 20)),
            "Interval { lower: Closed(10), upper: Open(20) }"
        );
    }

    #[test]
    fn test_from_ranges() {
        assert_eq!(Iv::from(0..10), Iv::closed_open(0, 10));
        assert_eq!(Iv::from(0..=10), Iv::closed(0, 10));
        assert_eq!(Iv::from(3..), Iv::at_least(3));
        assert_eq!(Iv::from(..3), Iv::less_than(3));
        assert_eq!(Iv::from(..=3), Iv::at_most(3));
        assert_eq!(Iv::from(..), Iv::unbounded());
    }

    #[test]
    fn test_range_bounds() {
        let iv = Iv::open_closed(5, 10);
        assert_eq!(iv.start_bound(), Bound::Excluded(&5));
        assert_eq!(iv.end_bound(), Bound::Included(&10));
        assert!(RangeBounds::contains(&iv, &10));
        assert!(!RangeBounds::contains(&iv, &5));
        assert_eq!(Iv::unbounded().start_bound(), Bound::Unbounded);
    }

    #[test]
    fn test_non_copy_values() {
        let a = Interval::closed("apple".to_string(), "melon".to_string());
        let b = Interval::open("banana".to_string(), "zucchini".to_string());
        assert_eq!(a.contains(&"cherry".to_string()), Ok(true));
        assert_eq!(
            a.intersect(&b),
            Interval::open_closed("banana".to_string(), "melon".to_string())
        );
    }
}
