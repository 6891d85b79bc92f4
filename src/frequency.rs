use core::fmt::Display;

/// How often a call is expected to have happened, checked by [verify](crate::verify).
///
/// Prefer the free constructor functions, e.g. `at_least(4)` instead of `Frequency::AtLeast(4)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Frequency {
    /// The bound itself is included.
    AtLeast(usize),
    /// The bound itself is included.
    AtMost(usize),
    /// The bound itself is excluded.
    MoreThan(usize),
    /// The bound itself is excluded.
    LessThan(usize),
    /// Only the bound itself is accepted.
    Exactly(usize),
}

impl Frequency {
    /// Whether the observed number of calls satisfies this frequency.
    pub fn validate(self, observed: usize) -> bool {
        match self {
            Self::AtLeast(times) => observed >= times,
            Self::AtMost(times) => observed <= times,
            Self::MoreThan(times) => observed > times,
            Self::LessThan(times) => observed < times,
            Self::Exactly(times) => observed == times,
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AtLeast(times) => write!(f, "at least {times}"),
            Self::AtMost(times) => write!(f, "at most {times}"),
            Self::MoreThan(times) => write!(f, "more than {times}"),
            Self::LessThan(times) => write!(f, "less than {times}"),
            Self::Exactly(times) => write!(f, "exactly {times}"),
        }
    }
}

/// Called `times` times or more.
pub fn at_least(times: usize) -> Frequency {
    Frequency::AtLeast(times)
}

/// Called `times` times or fewer.
pub fn at_most(times: usize) -> Frequency {
    Frequency::AtMost(times)
}

/// Called strictly more than `times` times.
pub fn more_than(times: usize) -> Frequency {
    Frequency::MoreThan(times)
}

/// Called strictly fewer than `times` times.
pub fn less_than(times: usize) -> Frequency {
    Frequency::LessThan(times)
}

/// Called exactly `times` times.
pub fn exactly(times: usize) -> Frequency {
    Frequency::Exactly(times)
}

/// Never called. Same as `exactly(0)`.
pub fn never() -> Frequency {
    Frequency::Exactly(0)
}
