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

use std::time::Duration;

/// Details about a value token that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not parse token '{token}' as type {type_name}")]
pub struct ParseTokenError {
    /// The text that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

/// The error type for parsing interval notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIntervalError {
    /// The input does not match the interval grammar.
    #[error("'{input}' is not valid interval notation")]
    Malformed { input: String },
    /// A start or end value could not be converted to the target type.
    #[error("parse error: {0}")]
    Token(#[from] ParseTokenError),
    /// Matching the input took longer than the configured budget.
    #[error("interval pattern matching exceeded its budget of {budget:?}")]
    Timeout { budget: Duration },
    /// The input was rejected before matching because of its length.
    #[error("input of {len} bytes exceeds the limit of {limit} bytes")]
    InputTooLong { len: usize, limit: usize },
}

impl ParseIntervalError {
    /// Returns `true` if the input itself is not a valid interval.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Token(_))
    }

    /// Returns `true` if the input was given up on because it is too costly
    /// to match, rather than because it is malformed.
    #[inline]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::InputTooLong { .. })
    }
}
