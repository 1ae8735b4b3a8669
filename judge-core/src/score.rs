//! Scores produced by successful evaluations.
//!
//! A [`Score`] pairs an [`Objective`] value with the [`ProblemFamily`] that
//! produced it. The family fixes the [`Direction`], which callers use to rank
//! submissions; the evaluators themselves only check correctness.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ProblemFamily;

/// Whether larger or smaller objective values are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Direction {
    /// Larger is better.
    Maximize,
    /// Smaller is better.
    Minimize,
}

impl Direction {
    /// Report whether `candidate` strictly improves on `incumbent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use judge_core::Direction;
    ///
    /// assert!(Direction::Maximize.prefers(3.0, 2.0));
    /// assert!(Direction::Minimize.prefers(2.0, 3.0));
    /// assert!(!Direction::Minimize.prefers(2.0, 2.0));
    /// ```
    #[must_use]
    pub const fn prefers(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Self::Maximize => candidate > incumbent,
            Self::Minimize => candidate < incumbent,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maximize => f.write_str("maximize"),
            Self::Minimize => f.write_str("minimize"),
        }
    }
}

/// Numeric objective value.
///
/// Integral objectives (profit, violations) are compared exactly; real
/// objectives (length, cost) carry floating-point noise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Objective {
    /// Exact integral value.
    Integer(u64),
    /// Floating-point value.
    Real(f64),
}

impl Objective {
    /// Widen the value to `f64` for ranking.
    #[expect(
        clippy::cast_precision_loss,
        reason = "ranking tolerates precision loss above 2^53"
    )]
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Real(value) => value,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            // Keep the fractional part of whole reals, e.g. `12.0`.
            Self::Real(value) => write!(f, "{value:?}"),
        }
    }
}

/// Outcome of a successful evaluation.
///
/// # Examples
///
/// ```
/// use judge_core::{Objective, ProblemFamily, Score};
///
/// let score = Score::new(ProblemFamily::Knapsack, Objective::Integer(30));
/// assert_eq!(score.verdict(), "Total profit: 30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Score {
    family: ProblemFamily,
    value: Objective,
}

impl Score {
    /// Tag an objective value with the family that produced it.
    #[must_use]
    pub const fn new(family: ProblemFamily, value: Objective) -> Self {
        Self { family, value }
    }

    /// Family that produced the score.
    #[must_use]
    pub const fn family(&self) -> ProblemFamily {
        self.family
    }

    /// Objective value.
    #[must_use]
    pub const fn value(&self) -> Objective {
        self.value
    }

    /// Ranking direction of the family.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.family.direction()
    }

    /// Report whether this score strictly beats `other`.
    ///
    /// Scores from different families never beat one another.
    #[must_use]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.family == other.family
            && self
                .direction()
                .prefers(self.value.as_f64(), other.value.as_f64())
    }

    /// Human-facing summary line, e.g. `Total length: 12.0`.
    #[must_use]
    pub fn verdict(&self) -> String {
        format!("{}: {}", self.family.verdict_label(), self.value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.family, self.value, self.direction())
    }
}
