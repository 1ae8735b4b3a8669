//! Core types for the optimisation judge.
//!
//! This crate holds everything the problem families share: the line and
//! token cursors used by every parser, the [`VerificationError`] taxonomy,
//! the [`Score`] produced by successful evaluations, the closed
//! [`ProblemFamily`] set, and the [`Problem`] trait each family implements.
//! Nothing here performs I/O or keeps state between calls.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
mod family;
mod problem;
mod score;
pub mod tokens;

pub use error::{
    AssignmentDefect, ConsistencyError, Document, ErrorKind, FeasibilityError, ParseError,
    ParseErrorReason, VerificationError,
};
pub use family::{ProblemFamily, UnknownProblemFamily};
pub use problem::Problem;
pub use score::{Direction, Objective, Score};
pub use tokens::{LineTokens, TextLines};
