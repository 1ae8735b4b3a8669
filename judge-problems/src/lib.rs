//! Problem families graded by the judge.
//!
//! Each module models one family: its testcase and submission types, their
//! text parsers, and the evaluator that turns a parsed pair into a
//! [`Score`](judge_core::Score) or a
//! [`VerificationError`](judge_core::VerificationError).
//!
//! - [`knapsack`]: pick items under a weight capacity, maximising profit.
//! - [`tsp`]: close a tour through points in the plane, minimising length.
//! - [`car_sequencing`]: order cars so option stations are not overloaded.
//! - [`warehouse`]: split customer demand across warehouses at least cost.
//!
//! [`evaluate`] dispatches raw text to the right family.
//!
//! # Examples
//!
//! ```
//! use judge_core::{ErrorKind, ProblemFamily};
//!
//! let family: ProblemFamily = "tsp".parse().expect("known family");
//! let err = judge_problems::evaluate(family, "3\n0 0\n0 3\n4 0\n", "12\n1 2 2\n")
//!     .expect_err("vertex 2 repeats");
//! assert_eq!(err.kind(), ErrorKind::Feasibility);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::fmt::Display;

pub mod car_sequencing;
pub mod knapsack;
mod registry;
pub mod tsp;
pub mod warehouse;

pub use car_sequencing::CarSequencing;
pub use knapsack::Knapsack;
pub use registry::{GradingRequest, evaluate};
pub use tsp::Tsp;
pub use warehouse::WarehouseLocation;

/// Join values with single spaces, as submission lines are written.
pub(crate) fn join_tokens<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
