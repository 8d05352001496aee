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

//! # Math Primitives
//!
//! Intervals over any totally ordered type, with closed, open and unbounded
//! limits on either side.
//!
//! ## Submodules
//!
//! - `limit`: The `Limit<T>` boundary type, the `Side` it bounds, and the
//!   `Cut` ordering that settles every open/closed tie-break at equal values.
//!   Free comparators (`less_than`, `greater_than_or_equal`, ...) take the
//!   side alongside each limit.
//! - `interval`: `Interval<T>` with validity and emptiness checks,
//!   membership, subset/superset relations, overlap and adjacency
//!   predicates, and set operations (union/intersect/subtract/symmetric
//!   difference/gap). Includes conversions from the `std::ops` range types
//!   and a `RangeBounds` implementation.
//! - `discrete`: Integer-only helpers: canonical closed form, point counts,
//!   and iteration (`Iterator`, `DoubleEndedIterator`, `FusedIterator`).
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod discrete;
pub mod interval;
pub mod limit;
