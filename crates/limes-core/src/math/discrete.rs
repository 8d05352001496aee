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

//! Integer-specific interval helpers.
//!
//! Over a discrete type every open limit has an equivalent closed one, so an
//! interval can be put into canonical closed form and its member points can
//! be enumerated.

use crate::math::{interval::Interval, limit::Limit};
use num_traits::PrimInt;
use std::iter::FusedIterator;

/// An iterator over the integer points contained within an `Interval`.
///
/// Unbounded sides start at `T::min_value()` or stop at `T::max_value()`.
///
/// # Examples
///
/// ```rust
/// # use limes_core::math::interval::Interval;
///
/// let iv = Interval::open_closed(1, 4);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalPoints<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for IntervalPoints<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(result)
    }
}

impl<T> DoubleEndedIterator for IntervalPoints<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(result)
    }
}

impl<T> FusedIterator for IntervalPoints<T> where T: PrimInt {}

impl<T> Interval<T>
where
    T: PrimInt,
{
    /// The smallest member, or `None` if an open lower limit sits at `T::max_value()`.
    #[inline]
    fn first_point(&self) -> Option<T> {
        match *self.lower() {
            Limit::Unbounded => Some(T::min_value()),
            Limit::Closed(v) => Some(v),
            Limit::Open(v) => v.checked_add(&T::one()),
        }
    }

    /// The largest member, or `None` if an open upper limit sits at `T::min_value()`.
    #[inline]
    fn last_point(&self) -> Option<T> {
        match *self.upper() {
            Limit::Unbounded => Some(T::max_value()),
            Limit::Closed(v) => Some(v),
            Limit::Open(v) => v.checked_sub(&T::one()),
        }
    }

    /// Rewrites open limits as the equivalent closed ones.
    ///
    /// Unbounded sides stay unbounded. Returns `None` if the interval holds no
    /// integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::open(2, 5).to_closed(), Some(Interval::closed(3, 4)));
    /// assert_eq!(Interval::greater_than(2).to_closed(), Some(Interval::at_least(3)));
    /// assert_eq!(Interval::open(2, 3).to_closed(), None);
    /// ```
    pub fn to_closed(&self) -> Option<Self> {
        let (first, last) = (self.first_point()?, self.last_point()?);
        if first > last {
            return None;
        }
        let lower = match self.lower() {
            Limit::Unbounded => Limit::Unbounded,
            _ => Limit::Closed(first),
        };
        let upper = match self.upper() {
            Limit::Unbounded => Limit::Unbounded,
            _ => Limit::Closed(last),
        };
        Some(Self::new(lower, upper))
    }

    /// Returns the number of integers in a bounded interval.
    ///
    /// Returns `None` for an interval with an unbounded side, or when the count
    /// exceeds `u128::MAX` (the full `u128`/`i128` range).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::interval::Interval;
    ///
    /// assert_eq!(Interval::closed_open(0, 10).point_count(), Some(10));
    /// assert_eq!(Interval::closed(i8::MIN, i8::MAX).point_count(), Some(256));
    /// assert_eq!(Interval::open(3, 3).point_count(), Some(0));
    /// assert_eq!(Interval::at_least(0).point_count(), None);
    /// ```
    pub fn point_count(&self) -> Option<u128> {
        if self.is_unbounded() {
            return None;
        }
        let (Some(first), Some(last)) = (self.first_point(), self.last_point()) else {
            return Some(0);
        };
        if first > last {
            return Some(0);
        }
        // Two's complement bits make the wrapping difference exact for every
        // primitive integer width.
        let bits = |v: T| v.to_i128().map(|v| v as u128).or_else(|| v.to_u128());
        let distance = bits(last)?.wrapping_sub(bits(first)?);
        distance.checked_add(1)
    }

    /// Creates an iterator over the points in the interval, in ascending order.
    ///
    /// Invalid and empty intervals yield nothing.
    #[inline]
    pub fn iter(&self) -> IntervalPoints<T> {
        match (self.first_point(), self.last_point()) {
            (Some(front), Some(back)) if front <= back => IntervalPoints {
                front,
                back,
                exhausted: false,
            },
            _ => IntervalPoints {
                front: T::zero(),
                back: T::zero(),
                exhausted: true,
            },
        }
    }
}

impl<T> IntoIterator for Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalPoints<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for &Interval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = IntervalPoints<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
