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

//! Parser for textual interval notation.
//!
//! The accepted grammar is
//!
//! ```raw
//! [STARTCHAR] VALUE? (.. | ,) VALUE? [ENDCHAR]
//! ```
//!
//! where `STARTCHAR` is `[` (closed), `(` or `]` (open) and `ENDCHAR` is `]`
//! (closed), `)` or `[` (open). A missing bracket means closed and a missing
//! value means unbounded on that side, whatever the bracket. Whitespace is
//! allowed around every token.
//!
//! ```raw
//! [2,)     lower closed at 2, unbounded above
//! [2,5]    closed-closed
//! [2,5)    closed-open
//! (,5)     unbounded below, open above at 5
//! 2..5     closed-closed
//! ]2,5[    open-open
//! ```
//!
//! Values are converted with `FromStr`, so every type that parses from text
//! can be the value type of a parsed interval.

mod error;

pub use error::{ParseIntervalError, ParseTokenError};

use crate::math::{
    interval::Interval,
    limit::{Limit, Side},
};
use regex::Regex;
use std::{
    str::FromStr,
    sync::LazyLock,
    time::{Duration, Instant},
};

static INTERVAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<start>[\[(\]])?\s*(?P<lower>[^\[\](),]*?)\s*(?:\.\.|,)\s*(?P<upper>[^\[\](),]*?)\s*(?P<end>[\])\[])?\s*$",
    )
    .expect("interval pattern must compile")
});

/// A configurable parser for interval notation.
///
/// # Configuration
/// * `match_timeout`: Budget for matching the pattern. Inputs whose match
///   takes at least this long are rejected with [`ParseIntervalError::Timeout`].
/// * `max_input_len`: Inputs longer than this many bytes are rejected with
///   [`ParseIntervalError::InputTooLong`] before matching starts.
///
/// # Examples
///
/// ```rust
/// # use limes_core::parse::IntervalParser;
/// # use limes_core::math::interval::Interval;
/// # use std::time::Duration;
///
/// let parser = IntervalParser::new()
///     .match_timeout(Duration::from_millis(10))
///     .max_input_len(64);
/// assert_eq!(parser.parse::<i32>("[2, 5)"), Ok(Interval::closed_open(2, 5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalParser {
    match_timeout: Duration,
    max_input_len: usize,
}

impl Default for IntervalParser {
    fn default() -> Self {
        Self {
            match_timeout: Self::DEFAULT_MATCH_TIMEOUT,
            max_input_len: Self::DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl IntervalParser {
    pub const DEFAULT_MATCH_TIMEOUT: Duration = Duration::from_millis(250);
    pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;

    /// Creates a new `IntervalParser` with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time budget for matching the pattern.
    #[inline]
    pub fn match_timeout(mut self, budget: Duration) -> Self {
        self.match_timeout = budget;
        self
    }

    /// Sets the maximum accepted input length in bytes.
    #[inline]
    pub fn max_input_len(mut self, limit: usize) -> Self {
        self.max_input_len = limit;
        self
    }

    /// Parses `input` into an interval over `T`.
    ///
    /// # Errors
    ///
    /// * [`ParseIntervalError::InputTooLong`] if `input` exceeds the length limit.
    /// * [`ParseIntervalError::Timeout`] if matching exceeds the time budget.
    /// * [`ParseIntervalError::Malformed`] if `input` does not match the grammar.
    /// * [`ParseIntervalError::Token`] if a value cannot be converted to `T`.
    pub fn parse<T>(&self, input: &str) -> Result<Interval<T>, ParseIntervalError>
    where
        T: FromStr,
    {
        if input.len() > self.max_input_len {
            tracing::debug!(
                len = input.len(),
                limit = self.max_input_len,
                "rejecting oversized interval expression"
            );
            return Err(ParseIntervalError::InputTooLong {
                len: input.len(),
                limit: self.max_input_len,
            });
        }

        let started = Instant::now();
        let captures = INTERVAL_PATTERN.captures(input);
        let elapsed = started.elapsed();
        if elapsed >= self.match_timeout {
            tracing::warn!(
                ?elapsed,
                budget = ?self.match_timeout,
                len = input.len(),
                "interval pattern matching exceeded its budget"
            );
            return Err(ParseIntervalError::Timeout {
                budget: self.match_timeout,
            });
        }

        let Some(captures) = captures else {
            tracing::debug!(input, "input is not interval notation");
            return Err(ParseIntervalError::Malformed {
                input: input.to_owned(),
            });
        };

        let token = |name: &str| captures.name(name).map_or("", |m| m.as_str());
        let bracket = |name: &str| token(name).chars().next();

        let lower = parse_limit::<T>(token("lower"), bracket("start"), Side::Lower)?;
        let upper = parse_limit::<T>(token("upper"), bracket("end"), Side::Upper)?;

        tracing::trace!(input, "parsed interval expression");
        Ok(Interval::new(lower, upper))
    }

    /// Parses `input`, returning `None` instead of an error.
    ///
    /// The discarded error is logged at debug level.
    pub fn try_parse<T>(&self, input: &str) -> Option<Interval<T>>
    where
        T: FromStr,
    {
        match self.parse(input) {
            Ok(interval) => Some(interval),
            Err(error) => {
                tracing::debug!(%error, "discarding interval parse failure");
                None
            }
        }
    }
}

fn parse_limit<T>(token: &str, bracket: Option<char>, side: Side) -> Result<Limit<T>, ParseTokenError>
where
    T: FromStr,
{
    if token.is_empty() {
        return Ok(Limit::Unbounded);
    }

    let value = token.parse::<T>().map_err(|_| ParseTokenError {
        token: token.to_owned(),
        type_name: std::any::type_name::<T>(),
    })?;

    let open = match side {
        Side::Lower => matches!(bracket, Some('(' | ']')),
        Side::Upper => matches!(bracket, Some(')' | '[')),
    };
    Ok(if open {
        Limit::Open(value)
    } else {
        Limit::Closed(value)
    })
}

impl<T> FromStr for Interval<T>
where
    T: FromStr,
{
    type Err = ParseIntervalError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntervalParser::default().parse(s)
    }
}

/// Parses interval notation directly from string slices with the default
/// [`IntervalParser`].
///
/// # Examples
///
/// ```rust
/// # use limes_core::parse::ParseInterval;
///
/// let iv = "[2,5]".parse_interval::<i32>().unwrap();
/// assert_eq!(iv.contains(&5), Ok(true));
/// assert!("abc".try_parse_interval::<i32>().is_none());
/// ```
pub trait ParseInterval {
    fn parse_interval<T>(&self) -> Result<Interval<T>, ParseIntervalError>
    where
        T: FromStr;

    fn try_parse_interval<T>(&self) -> Option<Interval<T>>
    where
        T: FromStr;
}

impl ParseInterval for str {
    #[inline]
    fn parse_interval<T>(&self) -> Result<Interval<T>, ParseIntervalError>
    where
        T: FromStr,
    {
        IntervalParser::default().parse(self)
    }

    #[inline]
    fn try_parse_interval<T>(&self) -> Option<Interval<T>>
    where
        T: FromStr,
    {
        IntervalParser::default().try_parse(self)
    }
}
