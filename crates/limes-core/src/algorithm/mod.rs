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

//! Algorithms over slices of intervals.

use crate::math::{interval::Interval, limit::Cut};

/// Checks whether the given intervals are pairwise disjoint and sorted by
/// their lower limits. Adjacent intervals such as `[0, 5)` and `[5, 10)` are
/// accepted.
///
/// Returns `true` if the intervals are disjoint and sorted, `false` otherwise.
#[inline]
pub fn are_disjoint_and_sorted<T>(intervals: &[Interval<T>]) -> bool
where
    T: Ord,
{
    intervals
        .windows(2)
        .all(|w| w[0].upper_cut() <= w[1].lower_cut())
}

/// Merges intervals into the smallest sorted set of pairwise disconnected,
/// non-empty intervals covering the same values.
///
/// Empty and invalid inputs are dropped; overlapping and adjacent inputs are
/// fused.
///
/// # Examples
///
/// ```rust
/// # use limes_core::algorithm::coalesce;
/// # use limes_core::math::interval::Interval;
///
/// let merged = coalesce([
///     Interval::closed(8, 9),
///     Interval::closed_open(0, 3),
///     Interval::closed(3, 5),
///     Interval::open(7, 7),
/// ]);
/// assert_eq!(merged, vec![Interval::closed(0, 5), Interval::closed(8, 9)]);
/// ```
pub fn coalesce<T, I>(intervals: I) -> Vec<Interval<T>>
where
    T: Ord + Clone,
    I: IntoIterator<Item = Interval<T>>,
{
    let mut sorted: Vec<Interval<T>> = intervals
        .into_iter()
        .filter(|iv| !iv.is_empty())
        .collect();
    sorted.sort_by(|a, b| a.lower_cut().cmp(&b.lower_cut()));

    let mut merged: Vec<Interval<T>> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        match merged.last_mut() {
            Some(last) if last.is_connected(&iv) => *last = last.union(&iv),
            _ => merged.push(iv),
        }
    }
    merged
}

/// Binary search for the interval containing `value`.
///
/// Returns the index of that interval, or `None` if no interval contains it.
///
/// # Panics
///
/// In debug builds, this function will panic if `intervals` is not disjoint
/// and sorted.
///
/// # Invariants
///
/// - `intervals` must be disjoint and sorted, as produced by [`coalesce`].
pub fn find_containing<T>(intervals: &[Interval<T>], value: &T) -> Option<usize>
where
    T: Ord,
{
    debug_assert!(
        are_disjoint_and_sorted(intervals),
        "called `find_containing` with intervals that are not disjoint and sorted"
    );

    // First interval whose upper limit lies above `value`.
    let point = Cut::Below(value);
    let mut lo: usize = 0;
    let mut hi: usize = intervals.len();
    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if intervals[mid].upper_cut() <= point {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    intervals
        .get(lo)
        .filter(|iv| iv.contains_point(value))
        .map(|_| lo)
}
