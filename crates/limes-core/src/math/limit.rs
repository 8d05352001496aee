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

//! Interval limits and their ordering.
//!
//! A [`Limit`] is one boundary of an interval: closed (inclusive), open
//! (exclusive), or unbounded. A limit alone does not know which side of an
//! interval it bounds; the [`Side`] is supplied whenever two limits are
//! compared. Pairing a limit with its side yields a [`Cut`], a position on the
//! extended ordered line that sits either just below or just above a value:
//!
//! ```raw
//! -inf  <  [3 == 3)  <  (3 == 3]  <  +inf
//! ```
//!
//! Every tie-break between open and closed limits at equal values follows
//! from this single total order.

use std::cmp::Ordering;

/// The side of an interval a limit bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Lower,
    Upper,
}

impl Side {
    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

/// The kind of a limit, without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitKind {
    Closed,
    Open,
    Infinite,
}

/// One boundary of an interval.
///
/// # Examples
///
/// ```rust
/// # use limes_core::math::limit::{Limit, LimitKind};
///
/// let l = Limit::Closed(3);
/// assert_eq!(l.value(), Some(&3));
/// assert_eq!(l.kind(), LimitKind::Closed);
/// assert!(Limit::<i32>::Unbounded.value().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Limit<T> {
    /// No boundary on this side.
    #[default]
    Unbounded,
    /// The value itself belongs to the interval.
    Closed(T),
    /// The value itself does not belong to the interval.
    Open(T),
}

impl<T> Limit<T> {
    #[inline]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed(_))
    }

    #[inline]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    #[inline]
    pub const fn is_bounded(&self) -> bool {
        !self.is_unbounded()
    }

    #[inline]
    pub const fn kind(&self) -> LimitKind {
        match self {
            Self::Unbounded => LimitKind::Infinite,
            Self::Closed(_) => LimitKind::Closed,
            Self::Open(_) => LimitKind::Open,
        }
    }

    /// Returns the boundary value, or `None` for an unbounded limit.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Unbounded => None,
            Self::Closed(v) | Self::Open(v) => Some(v),
        }
    }

    /// Consumes the limit and returns its boundary value, if any.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Unbounded => None,
            Self::Closed(v) | Self::Open(v) => Some(v),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Limit<&T> {
        match self {
            Self::Unbounded => Limit::Unbounded,
            Self::Closed(v) => Limit::Closed(v),
            Self::Open(v) => Limit::Open(v),
        }
    }

    /// Maps the boundary value while keeping the kind.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Limit<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Unbounded => Limit::Unbounded,
            Self::Closed(v) => Limit::Closed(f(v)),
            Self::Open(v) => Limit::Open(f(v)),
        }
    }

    /// Places this limit on the extended line as the bound of `side`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use limes_core::math::limit::{Cut, Limit, Side};
    ///
    /// assert_eq!(Limit::Closed(3).cut(Side::Lower), Cut::Below(&3));
    /// assert_eq!(Limit::Closed(3).cut(Side::Upper), Cut::Above(&3));
    /// assert_eq!(Limit::<i32>::Unbounded.cut(Side::Upper), Cut::PosInfinity);
    /// ```
    #[inline]
    pub fn cut(&self, side: Side) -> Cut<'_, T> {
        match (self, side) {
            (Self::Unbounded, Side::Lower) => Cut::NegInfinity,
            (Self::Unbounded, Side::Upper) => Cut::PosInfinity,
            (Self::Closed(v), Side::Lower) | (Self::Open(v), Side::Upper) => Cut::Below(v),
            (Self::Open(v), Side::Lower) | (Self::Closed(v), Side::Upper) => Cut::Above(v),
        }
    }
}

/// A position on the extended ordered line of `T`.
///
/// `Below(v)` lies between every value less than `v` and `v` itself,
/// `Above(v)` between `v` and every value greater than `v`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Cut<'a, T> {
    NegInfinity,
    Below(&'a T),
    Above(&'a T),
    PosInfinity,
}

impl<T> Clone for Cut<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cut<'_, T> {}

impl<'a, T> Cut<'a, T> {
    /// Returns the value this cut sits next to, or `None` for an infinity.
    #[inline]
    pub const fn value(&self) -> Option<&'a T> {
        match self {
            Self::Below(v) | Self::Above(v) => Some(*v),
            Self::NegInfinity | Self::PosInfinity => None,
        }
    }

    /// Converts the cut back into the limit that produces it on `side`.
    ///
    /// An infinity that cannot bound `side` (e.g. `PosInfinity` as a lower
    /// limit) has no limit representation and converts to `Unbounded`.
    #[inline]
    pub fn into_limit(self, side: Side) -> Limit<T>
    where
        T: Clone,
    {
        match (self, side) {
            (Self::Below(v), Side::Lower) | (Self::Above(v), Side::Upper) => {
                Limit::Closed(v.clone())
            }
            (Self::Above(v), Side::Lower) | (Self::Below(v), Side::Upper) => {
                Limit::Open(v.clone())
            }
            (Self::NegInfinity, Side::Lower) | (Self::PosInfinity, Side::Upper) => {
                Limit::Unbounded
            }
            (Self::PosInfinity, Side::Lower) | (Self::NegInfinity, Side::Upper) => {
                debug_assert!(false, "called `Cut::into_limit` with an infinity on the wrong side");
                Limit::Unbounded
            }
        }
    }
}

impl<T> Ord for Cut<'_, T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::NegInfinity, Self::NegInfinity) | (Self::PosInfinity, Self::PosInfinity) => {
                Ordering::Equal
            }
            (Self::NegInfinity, _) | (_, Self::PosInfinity) => Ordering::Less,
            (_, Self::NegInfinity) | (Self::PosInfinity, _) => Ordering::Greater,
            (Self::Below(a), Self::Below(b)) | (Self::Above(a), Self::Above(b)) => a.cmp(b),
            // At equal values, below sorts before above.
            (Self::Below(a), Self::Above(b)) => match a.cmp(b) {
                Ordering::Greater => Ordering::Greater,
                _ => Ordering::Less,
            },
            (Self::Above(a), Self::Below(b)) => match a.cmp(b) {
                Ordering::Less => Ordering::Less,
                _ => Ordering::Greater,
            },
        }
    }
}

impl<T> PartialOrd for Cut<'_, T>
where
    T: Ord,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compares limit `a` bounding `a_side` with limit `b` bounding `b_side`.
///
/// # Examples
///
/// ```rust
/// # use limes_core::math::limit::{compare, Limit, Side};
/// # use std::cmp::Ordering;
///
/// // `[3` admits 3, `(3` does not.
/// assert_eq!(
///     compare(&Limit::Closed(3), Side::Lower, &Limit::Open(3), Side::Lower),
///     Ordering::Less
/// );
/// ```
#[inline]
pub fn compare<T>(a: &Limit<T>, a_side: Side, b: &Limit<T>, b_side: Side) -> Ordering
where
    T: Ord,
{
    a.cut(a_side).cmp(&b.cut(b_side))
}

#[inline]
pub fn less_than<T>(a: &Limit<T>, a_side: Side, b: &Limit<T>, b_side: Side) -> bool
where
    T: Ord,
{
    compare(a, a_side, b, b_side) == Ordering::Less
}

#[inline]
pub fn less_than_or_equal<T>(a: &Limit<T>, a_side: Side, b: &Limit<T>, b_side: Side) -> bool
where
    T: Ord,
{
    compare(a, a_side, b, b_side) != Ordering::Greater
}

#[inline]
pub fn greater_than<T>(a: &Limit<T>, a_side: Side, b: &Limit<T>, b_side: Side) -> bool
where
    T: Ord,
{
    compare(a, a_side, b, b_side) == Ordering::Greater
}

#[inline]
pub fn greater_than_or_equal<T>(a: &Limit<T>, a_side: Side, b: &Limit<T>, b_side: Side) -> bool
where
    T: Ord,
{
    compare(a, a_side, b, b_side) != Ordering::Less
}
