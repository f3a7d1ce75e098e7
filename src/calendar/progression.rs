//! Year progressions and closed year ranges.
//!
//! A progression is an arithmetic sequence of years with a fixed start, a
//! recomputed final element, and a non-zero step. A range is the step-1
//! specialization with closed-range membership.

use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

use super::Year;

/// Errors that occur when constructing progressions and ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProgressionError {
    #[error("Step must be non-zero")]
    ZeroStep,

    #[error("Step must be greater than i32::MIN to avoid overflow on negation")]
    StepOverflow,

    #[error("Both start year and end year are required when either is given")]
    HalfOpenBounds,
}

/// An arithmetic sequence of years.
///
/// `last` is always the true final element reachable from `first` by whole
/// steps without passing the requested end bound; it is recomputed at
/// construction, not copied from the caller.
#[derive(Debug, Clone, Copy)]
pub struct YearProgression {
    first: Year,
    last: Year,
    step: i32,
}

impl YearProgression {
    /// Creates a progression within the bounds of a closed range.
    ///
    /// The progression starts at `start` and goes toward `end` without
    /// passing it, moving by `step` each element. To go backwards the step
    /// must be negative.
    pub fn from_closed_range(start: Year, end: Year, step: i32) -> Result<Self, ProgressionError> {
        if step == 0 {
            return Err(ProgressionError::ZeroStep);
        }
        if step == i32::MIN {
            return Err(ProgressionError::StepOverflow);
        }
        Ok(Self {
            first: start,
            last: progression_last_element(start, end, step),
            step,
        })
    }

    /// The first element in the progression.
    pub fn first(&self) -> Year {
        self.first
    }

    /// The last element in the progression.
    pub fn last(&self) -> Year {
        self.last
    }

    /// The step of the progression.
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Checks if the progression is empty.
    ///
    /// A progression with a positive step is empty if its first element is
    /// greater than the last; with a negative step, if its first element is
    /// less than the last.
    pub fn is_empty(&self) -> bool {
        if self.step > 0 {
            self.first > self.last
        } else {
            self.first < self.last
        }
    }

    /// Begins a fresh traversal of the progression.
    ///
    /// Each call returns an independent iterator; the progression itself is
    /// never mutated by iteration.
    pub fn iter(&self) -> YearProgressionIter {
        YearProgressionIter::new(self.first, self.last, self.step)
    }
}

impl PartialEq for YearProgression {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty()
            || self.first == other.first && self.last == other.last && self.step == other.step
    }
}

impl Eq for YearProgression {}

impl Hash for YearProgression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // All empty progressions are equal, so they must hash alike.
        if self.is_empty() {
            state.write_i32(-1);
        } else {
            self.first.hash(state);
            self.last.hash(state);
            self.step.hash(state);
        }
    }
}

impl fmt::Display for YearProgression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.step > 0 {
            write!(f, "{}..{} step {}", self.first, self.last, self.step)
        } else {
            write!(f, "{} downTo {} step {}", self.first, self.last, -self.step)
        }
    }
}

impl IntoIterator for &YearProgression {
    type Item = Year;
    type IntoIter = YearProgressionIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A single traversal over a year progression.
///
/// Exhaustion is signalled through the iterator protocol: `next()` returns
/// `None` once the final element has been yielded.
#[derive(Debug, Clone)]
pub struct YearProgressionIter {
    next: Year,
    final_element: Year,
    step: i32,
    has_next: bool,
}

impl YearProgressionIter {
    fn new(first: Year, last: Year, step: i32) -> Self {
        let has_next = if step > 0 { first <= last } else { first >= last };
        Self {
            next: if has_next { first } else { last },
            final_element: last,
            step,
            has_next,
        }
    }
}

impl Iterator for YearProgressionIter {
    type Item = Year;

    fn next(&mut self) -> Option<Year> {
        if !self.has_next {
            return None;
        }
        let value = self.next;
        if value == self.final_element {
            self.has_next = false;
        } else {
            self.next = self.next.plus_years(i64::from(self.step));
        }
        Some(value)
    }
}

/// A closed range of years; a progression with step fixed to 1.
#[derive(Debug, Clone, Copy)]
pub struct YearRange {
    first: Year,
    last: Year,
}

impl YearRange {
    /// Creates a range from `start` to `end_inclusive`.
    ///
    /// With step 1 every end bound is reachable, so no recomputation is
    /// needed and construction cannot fail.
    pub fn new(start: Year, end_inclusive: Year) -> Self {
        Self {
            first: start,
            last: end_inclusive,
        }
    }

    /// The first year in the range.
    pub fn start(&self) -> Year {
        self.first
    }

    /// The last year in the range, inclusive.
    pub fn end_inclusive(&self) -> Year {
        self.last
    }

    /// Checks whether the given year lies within the range.
    pub fn contains(&self, year: Year) -> bool {
        self.first <= year && year <= self.last
    }

    /// Checks whether the range is empty.
    ///
    /// The range is empty if its start value is greater than the end value.
    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    /// Begins a fresh traversal of the range.
    pub fn iter(&self) -> YearProgressionIter {
        YearProgressionIter::new(self.first, self.last, 1)
    }

    /// Views this range as a step-1 progression.
    pub fn as_progression(&self) -> YearProgression {
        YearProgression {
            first: self.first,
            last: self.last,
            step: 1,
        }
    }
}

impl PartialEq for YearRange {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty()
            || self.first == other.first && self.last == other.last
    }
}

impl Eq for YearRange {}

impl Hash for YearRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            state.write_i32(-1);
        } else {
            self.first.hash(state);
            self.last.hash(state);
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.first, self.last)
    }
}

impl IntoIterator for &YearRange {
    type Item = Year;
    type IntoIter = YearProgressionIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a range from a pair of optional bounds.
///
/// Both absent means "no range requested" and yields `Ok(None)`. Supplying
/// exactly one bound is a caller error.
pub fn year_range(
    start: Option<Year>,
    end_inclusive: Option<Year>,
) -> Result<Option<YearRange>, ProgressionError> {
    match (start, end_inclusive) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) => Ok(Some(YearRange::new(start, end))),
        _ => Err(ProgressionError::HalfOpenBounds),
    }
}

/// [`year_range`] over raw integer years.
pub fn year_range_from_i32(
    start: Option<i32>,
    end_inclusive: Option<i32>,
) -> Result<Option<YearRange>, ProgressionError> {
    year_range(start.map(Year::of), end_inclusive.map(Year::of))
}

/// Final element of a bounded arithmetic progression.
///
/// Callers guarantee `step != 0` and `step != i32::MIN`. Arithmetic runs in
/// i64 so differences between extreme i32 years cannot overflow; the result
/// always lies between `start` and `end` and fits back into i32.
fn progression_last_element(start: Year, end: Year, step: i32) -> Year {
    let (start, end, step) = (
        i64::from(start.value()),
        i64::from(end.value()),
        i64::from(step),
    );
    let last = if step > 0 {
        if start >= end {
            end
        } else {
            end - difference_modulo(end, start, step)
        }
    } else if start <= end {
        end
    } else {
        end + difference_modulo(start, end, -step)
    };
    Year::of(last as i32)
}

fn difference_modulo(a: i64, b: i64, c: i64) -> i64 {
    modulo(modulo(a, c) - modulo(b, c), c)
}

/// True mathematical modulo: the result is always in `0..b` for positive `b`,
/// regardless of the sign of `a`.
fn modulo(a: i64, b: i64) -> i64 {
    let rem = a % b;
    if rem >= 0 {
        rem
    } else {
        rem + b
    }
}
