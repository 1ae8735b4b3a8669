//! Facade crate for the judge engine.
//!
//! This crate re-exports the shared verification types and the problem
//! families, so callers can grade a submission with a single dependency.

#![forbid(unsafe_code)]

pub use judge_core::{
    AssignmentDefect, ConsistencyError, Direction, Document, ErrorKind, FeasibilityError,
    Objective, ParseError, ParseErrorReason, Problem, ProblemFamily, Score, UnknownProblemFamily,
    VerificationError,
};
pub use judge_problems::{
    CarSequencing, GradingRequest, Knapsack, Tsp, WarehouseLocation, car_sequencing, evaluate,
    knapsack, tsp, warehouse,
};
