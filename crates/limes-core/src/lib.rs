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

//! # Limes Core
//!
//! Mathematical intervals over any totally ordered type. An interval is
//! bounded on each side by a limit that is closed (inclusive), open
//! (exclusive), or unbounded, and supports membership tests, subset and
//! superset relations, overlap checks, set algebra, and parsing from the
//! usual textual notation (`[2, 5)`, `(, 0]`, `2..5`).
//!
//! ## Modules
//!
//! - `math`: The `Limit<T>` and `Interval<T>` types, the cut ordering that
//!   resolves open/closed tie-breaks, relational queries, set operations
//!   (union/intersect/subtract/symmetric difference/gap), and integer-only
//!   helpers (canonical closed form, point counts, iteration).
//! - `algorithm`: Slice algorithms over intervals: disjointness checks,
//!   coalescing into a minimal sorted set, and binary-search membership.
//! - `parse`: A configurable parser for interval notation with a typed error
//!   taxonomy that separates malformed input from inputs too costly to match,
//!   plus the `ParseInterval` extension trait for string slices.
//!
//! ## Example
//!
//! ```rust
//! use limes_core::math::interval::Interval;
//! use limes_core::parse::ParseInterval;
//!
//! let a = "[2, 5]".parse_interval::<i32>().unwrap();
//! let b = Interval::closed(3, 8);
//! assert_eq!(a.intersect(&b), Interval::closed(3, 5));
//! assert_eq!(a.union(&b), Interval::closed(2, 8));
//! ```
//!
//! All types are immutable values and every operation is synchronous and
//! free of side effects, so they can be shared across threads freely.

pub mod algorithm;
pub mod math;
pub mod parse;
