//! Error taxonomy shared by every problem family.
//!
//! A rejected submission is always described by a [`VerificationError`],
//! which is one of three kinds:
//! - [`ParseError`]: the testcase or submission text is malformed.
//! - [`FeasibilityError`]: the submission breaks a hard constraint.
//! - [`ConsistencyError`]: the claimed score disagrees with the computed one.
//!
//! Errors are terminal for a single evaluation and carry the offending values
//! so callers can render a precise verdict.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Objective, ProblemFamily};

/// Input document a [`ParseError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Document {
    /// Problem instance text.
    Testcase,
    /// Candidate solution text.
    Submission,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Testcase => f.write_str("testcase"),
            Self::Submission => f.write_str("submission"),
        }
    }
}

/// Why a line of input could not be parsed.
///
/// Columns are 1-based token positions within the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorReason {
    /// The document ended before a required line.
    #[error("line is missing")]
    MissingLine,
    /// The line holds the wrong number of tokens.
    #[error("expected {expected} tokens, found {found}")]
    TokenCount {
        /// Number of tokens the format requires.
        expected: usize,
        /// Number of tokens present.
        found: usize,
    },
    /// A token is not an integer of the expected range.
    #[error("token {column} ({token:?}) is not a valid integer")]
    InvalidInteger {
        /// Position of the token.
        column: usize,
        /// Raw token text.
        token: String,
    },
    /// A token is not a floating-point number.
    #[error("token {column} ({token:?}) is not a valid number")]
    InvalidFloat {
        /// Position of the token.
        column: usize,
        /// Raw token text.
        token: String,
    },
    /// A token parsed but holds a value the format forbids.
    #[error("token {column} ({token:?}) must be {expected}")]
    InvalidValue {
        /// Position of the token.
        column: usize,
        /// Raw token text.
        token: String,
        /// Description of the accepted values.
        expected: &'static str,
    },
    /// A declared quantity disagrees with the data that follows it.
    #[error("{field} mismatch: expected {expected}, found {found}")]
    Mismatch {
        /// Name of the declared quantity.
        field: &'static str,
        /// Declared value.
        expected: usize,
        /// Value implied by the data.
        found: usize,
    },
}

/// Malformed testcase or submission text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{document} line {line}: {reason}")]
pub struct ParseError {
    /// Document containing the fault.
    pub document: Document,
    /// 1-based line number of the fault.
    pub line: usize,
    /// What went wrong on that line.
    pub reason: ParseErrorReason,
}

impl ParseError {
    /// Construct a parse error for `line` of `document`.
    #[must_use]
    pub const fn new(document: Document, line: usize, reason: ParseErrorReason) -> Self {
        Self {
            document,
            line,
            reason,
        }
    }
}

/// Structural defect in a warehouse assignment matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignmentDefect {
    /// The matrix has the wrong number of customer rows.
    #[error("wrong number of customers, expected {expected}, found {found}")]
    CustomerCount {
        /// Number of customers in the testcase.
        expected: usize,
        /// Number of rows submitted.
        found: usize,
    },
    /// A customer row has the wrong number of entries.
    #[error(
        "wrong number of warehouses for customer {customer}, expected {expected}, found {found}"
    )]
    WarehouseCount {
        /// 0-based customer index.
        customer: usize,
        /// Number of warehouses in the testcase.
        expected: usize,
        /// Number of entries submitted.
        found: usize,
    },
    /// A fraction lies outside `[0, 1]` or is not a number.
    #[error("customer {customer} assigns {value} to warehouse {warehouse}, outside [0, 1]")]
    FractionOutOfRange {
        /// 0-based customer index.
        customer: usize,
        /// 0-based warehouse index.
        warehouse: usize,
        /// Offending fraction.
        value: f64,
    },
}

/// A submission that violates the hard constraints of its testcase.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeasibilityError {
    /// A knapsack item index is outside `1..=item_count`.
    #[error("incorrect item {item}, expected 1..={item_count}")]
    IndexOutOfRange {
        /// Submitted 1-based index.
        item: i64,
        /// Number of items in the testcase.
        item_count: usize,
    },
    /// The chosen knapsack items weigh more than the capacity.
    ///
    /// `total_weight` saturates at `u64::MAX`.
    #[error("weight overflow: {total_weight} > {capacity}")]
    CapacityExceeded {
        /// Combined weight of the chosen items.
        total_weight: u64,
        /// Knapsack capacity.
        capacity: u64,
    },
    /// A TSP route does not list every vertex exactly once.
    #[error("route has {found} vertices, expected {expected}")]
    WrongRouteLength {
        /// Number of vertices in the testcase.
        expected: usize,
        /// Number of route entries submitted.
        found: usize,
    },
    /// A TSP route entry is outside `1..=vertex_count`.
    #[error("invalid vertex {vertex}, expected 1..={vertex_count}")]
    InvalidVertex {
        /// Submitted 1-based vertex id.
        vertex: i64,
        /// Number of vertices in the testcase.
        vertex_count: usize,
    },
    /// A TSP route visits a vertex more than once.
    #[error("duplicate vertex found: {vertex}")]
    DuplicateVertex {
        /// Repeated 1-based vertex id.
        vertex: usize,
    },
    /// A car sequence names an undeclared car type.
    #[error("unknown car type {car_type}, expected 0..{type_count}")]
    UnknownCarType {
        /// Submitted type id.
        car_type: i64,
        /// Number of declared types.
        type_count: usize,
    },
    /// A car sequence holds the wrong number of cars of a type.
    #[error("wrong number of cars of type {car_type}, expected {expected}, found {found}")]
    WrongTypeCount {
        /// 0-based type id.
        car_type: usize,
        /// Declared count.
        expected: usize,
        /// Count in the sequence.
        found: usize,
    },
    /// A warehouse assignment matrix is malformed.
    #[error("invalid assignment: {0}")]
    InvalidAssignment(#[from] AssignmentDefect),
    /// A customer's demand is not covered.
    #[error("customer {customer} demand is not fulfilled, {unmet} short")]
    DemandNotMet {
        /// 0-based customer index.
        customer: usize,
        /// Demand left unserved.
        unmet: f64,
    },
    /// A warehouse serves more demand than its capacity.
    #[error("warehouse {warehouse} is overcrowded by {overflow}")]
    WarehouseCapacityExceeded {
        /// 0-based warehouse index.
        warehouse: usize,
        /// Demand served beyond capacity.
        overflow: f64,
    },
}

/// A claimed score that disagrees with the computed one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyError {
    /// The claimed objective differs beyond the family's tolerance.
    #[error("wrong {} reported: got {claimed}, actual {actual}", .family.objective_name())]
    ScoreMismatch {
        /// Family whose objective was checked.
        family: ProblemFamily,
        /// Value stated in the submission.
        claimed: Objective,
        /// Value computed by the evaluator.
        actual: Objective,
    },
}

/// Coarse classification of a [`VerificationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ErrorKind {
    /// Malformed input text.
    Parse,
    /// Violated hard constraint.
    Feasibility,
    /// Claimed score mismatch.
    Consistency,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => f.write_str("parse"),
            Self::Feasibility => f.write_str("feasibility"),
            Self::Consistency => f.write_str("consistency"),
        }
    }
}

/// Terminal outcome of a rejected evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerificationError {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// See [`FeasibilityError`].
    #[error(transparent)]
    Feasibility(#[from] FeasibilityError),
    /// See [`ConsistencyError`].
    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

impl VerificationError {
    /// Report which kind of failure this is.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::Feasibility(_) => ErrorKind::Feasibility,
            Self::Consistency(_) => ErrorKind::Consistency,
        }
    }
}

impl From<AssignmentDefect> for VerificationError {
    fn from(defect: AssignmentDefect) -> Self {
        Self::Feasibility(FeasibilityError::InvalidAssignment(defect))
    }
}
