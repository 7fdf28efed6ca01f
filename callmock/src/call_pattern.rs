//! The [`call_pattern`](self) module contains the [`CallPattern`] type that
//! defines how often a mocked function is expected to be called.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{RangeFrom, RangeFull, RangeToInclusive};

/// Expected number of calls of a [`Mock`](crate::Mock).
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CallPattern {
    /// The mock must not be called at all.
    None,

    /// The mock may be called any number of times, including zero.
    #[default]
    AnyNumber,

    /// The mock must be called at least `n` times.
    AtLeast(usize),

    /// The mock must be called at most `n` times.
    AtMost(usize),

    /// The mock must be called exactly `n` times.
    Exactly(usize),
}

impl CallPattern {
    /// Return `true` if `observed` calls satisfy this pattern, `false` otherwise.
    #[must_use]
    pub fn matches(&self, observed: usize) -> bool {
        matches(*self, observed)
    }
}

/// Return `true` if `observed` calls satisfy the passed `pattern`.
#[must_use]
pub fn matches(pattern: CallPattern, observed: usize) -> bool {
    match pattern {
        CallPattern::None => observed == 0,
        CallPattern::AnyNumber => true,
        CallPattern::AtLeast(n) => observed >= n,
        CallPattern::AtMost(n) => observed <= n,
        CallPattern::Exactly(n) => observed == n,
    }
}

impl Display for CallPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => write!(f, "None"),
            Self::AnyNumber => write!(f, "AnyNumber"),
            Self::AtLeast(n) => write!(f, "AtLeast({n})"),
            Self::AtMost(n) => write!(f, "AtMost({n})"),
            Self::Exactly(n) => write!(f, "Exactly({n})"),
        }
    }
}

impl From<usize> for CallPattern {
    fn from(value: usize) -> Self {
        Self::Exactly(value)
    }
}

impl From<RangeFrom<usize>> for CallPattern {
    fn from(value: RangeFrom<usize>) -> Self {
        Self::AtLeast(value.start)
    }
}

impl From<RangeToInclusive<usize>> for CallPattern {
    fn from(value: RangeToInclusive<usize>) -> Self {
        Self::AtMost(value.end)
    }
}

impl From<RangeFull> for CallPattern {
    fn from(_value: RangeFull) -> Self {
        Self::AnyNumber
    }
}
