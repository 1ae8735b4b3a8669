//! Shared test harness modules for the judge CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod grade_unit;
mod helpers;
