//! The closed set of supported problem families.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Direction;

/// Problem family a testcase, submission or score belongs to.
///
/// # Examples
///
/// ```
/// use judge_core::{Direction, ProblemFamily};
///
/// let family: ProblemFamily = "car_sequencing".parse().expect("known family");
/// assert_eq!(family, ProblemFamily::CarSequencing);
/// assert_eq!(family.direction(), Direction::Minimize);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ProblemFamily {
    /// Bounded 0/1 knapsack.
    Knapsack,
    /// Euclidean travelling salesman cycle.
    Tsp,
    /// Car sequencing with option windows.
    CarSequencing,
    /// Capacitated warehouse location with fractional assignment.
    WarehouseLocation,
}

/// Returned when parsing an unrecognised family identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown problem family {name:?}")]
pub struct UnknownProblemFamily {
    /// Identifier that failed to match.
    pub name: String,
}

impl ProblemFamily {
    /// Every supported family, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Knapsack,
        Self::Tsp,
        Self::CarSequencing,
        Self::WarehouseLocation,
    ];

    /// Canonical identifier used by callers and configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Knapsack => "knapsack",
            Self::Tsp => "tsp",
            Self::CarSequencing => "car_sequencing",
            Self::WarehouseLocation => "warehouse_location",
        }
    }

    /// Whether larger or smaller objective values are better.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Knapsack => Direction::Maximize,
            Self::Tsp | Self::CarSequencing | Self::WarehouseLocation => Direction::Minimize,
        }
    }

    /// Human name of the objective, as used in mismatch messages.
    #[must_use]
    pub const fn objective_name(self) -> &'static str {
        match self {
            Self::Knapsack => "profit",
            Self::Tsp => "route length",
            Self::CarSequencing => "violations number",
            Self::WarehouseLocation => "total cost",
        }
    }

    pub(crate) const fn verdict_label(self) -> &'static str {
        match self {
            Self::Knapsack => "Total profit",
            Self::Tsp => "Total length",
            Self::CarSequencing => "Total violations",
            Self::WarehouseLocation => "Total cost",
        }
    }
}

impl fmt::Display for ProblemFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProblemFamily {
    type Err = UnknownProblemFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.name() == trimmed)
            .ok_or_else(|| UnknownProblemFamily {
                name: trimmed.to_owned(),
            })
    }
}
