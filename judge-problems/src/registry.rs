//! Dispatch from a problem family to its evaluator.

use judge_core::{Problem, ProblemFamily, Score, VerificationError};
use log::debug;

use crate::{CarSequencing, Knapsack, Tsp, WarehouseLocation};

/// Grade raw `submission` text against raw `testcase` text for `family`.
///
/// Parses the testcase, then the submission, then evaluates. The first
/// failure ends the evaluation.
///
/// # Errors
/// Returns the [`VerificationError`] raised by whichever stage rejects the
/// input.
///
/// # Examples
///
/// ```
/// use judge_core::{Objective, ProblemFamily};
///
/// let score = judge_problems::evaluate(
///     ProblemFamily::Knapsack,
///     "3 10\n10 5\n20 4\n15 6\n",
///     "30\n1 2\n",
/// )
/// .expect("feasible pick");
/// assert_eq!(score.value(), Objective::Integer(30));
/// ```
pub fn evaluate(
    family: ProblemFamily,
    testcase: &str,
    submission: &str,
) -> Result<Score, VerificationError> {
    debug!(
        "grading {family} submission ({} bytes) against testcase ({} bytes)",
        submission.len(),
        testcase.len()
    );
    let outcome = match family {
        ProblemFamily::Knapsack => Knapsack::grade(testcase, submission),
        ProblemFamily::Tsp => Tsp::grade(testcase, submission),
        ProblemFamily::CarSequencing => CarSequencing::grade(testcase, submission),
        ProblemFamily::WarehouseLocation => WarehouseLocation::grade(testcase, submission),
    };
    match &outcome {
        Ok(score) => debug!("{family} submission accepted: {score}"),
        Err(err) => debug!("{family} submission rejected ({}): {err}", err.kind()),
    }
    outcome
}

/// Borrowed inputs of one grading call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradingRequest<'a> {
    /// Family the texts belong to.
    pub family: ProblemFamily,
    /// Raw testcase text.
    pub testcase: &'a str,
    /// Raw submission text.
    pub submission: &'a str,
}

impl<'a> GradingRequest<'a> {
    /// Bundle the inputs of a grading call.
    #[must_use]
    pub const fn new(family: ProblemFamily, testcase: &'a str, submission: &'a str) -> Self {
        Self {
            family,
            testcase,
            submission,
        }
    }

    /// Run [`evaluate`] on the bundled inputs.
    ///
    /// # Errors
    /// See [`evaluate`].
    pub fn evaluate(&self) -> Result<Score, VerificationError> {
        evaluate(self.family, self.testcase, self.submission)
    }
}
