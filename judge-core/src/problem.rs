//! Uniform interface implemented by every problem family.

use crate::{ParseError, ProblemFamily, Score, VerificationError};

/// Parse and evaluate one problem family.
///
/// Implementations are stateless: every method is a pure function of its
/// inputs, so one testcase may be shared read-only across threads while
/// separate submissions are evaluated against it.
///
/// # Examples
///
/// ```
/// use judge_core::{
///     Document, Objective, ParseError, Problem, ProblemFamily, Score, TextLines,
///     VerificationError,
/// };
///
/// struct Echo;
///
/// impl Problem for Echo {
///     type Testcase = u64;
///     type Submission = u64;
///     const FAMILY: ProblemFamily = ProblemFamily::CarSequencing;
///
///     fn parse_testcase(text: &str) -> Result<u64, ParseError> {
///         TextLines::new(Document::Testcase, text).next_line()?.integer_at(0)
///     }
///
///     fn parse_submission(text: &str) -> Result<u64, ParseError> {
///         TextLines::new(Document::Submission, text).next_line()?.integer_at(0)
///     }
///
///     fn evaluate(_testcase: &u64, submission: &u64) -> Result<Score, VerificationError> {
///         Ok(Score::new(Self::FAMILY, Objective::Integer(*submission)))
///     }
/// }
///
/// let score = Echo::grade("1", "4").expect("graded");
/// assert_eq!(score.value(), Objective::Integer(4));
/// ```
pub trait Problem {
    /// Parsed problem instance.
    type Testcase: Send + Sync;
    /// Parsed candidate solution.
    type Submission: Send + Sync;

    /// Family tag attached to scores.
    const FAMILY: ProblemFamily;

    /// Parse raw testcase text.
    ///
    /// # Errors
    /// Returns a [`ParseError`] locating the malformed line.
    fn parse_testcase(text: &str) -> Result<Self::Testcase, ParseError>;

    /// Parse raw submission text.
    ///
    /// # Errors
    /// Returns a [`ParseError`] locating the malformed line.
    fn parse_submission(text: &str) -> Result<Self::Submission, ParseError>;

    /// Check feasibility and compute the score.
    ///
    /// # Errors
    /// Returns a feasibility or consistency [`VerificationError`].
    fn evaluate(
        testcase: &Self::Testcase,
        submission: &Self::Submission,
    ) -> Result<Score, VerificationError>;

    /// Parse both documents and evaluate them.
    ///
    /// The testcase is parsed first, so a broken testcase is reported even
    /// when the submission is broken too.
    ///
    /// # Errors
    /// Returns the first [`VerificationError`] encountered.
    fn grade(testcase: &str, submission: &str) -> Result<Score, VerificationError> {
        let testcase = Self::parse_testcase(testcase)?;
        let submission = Self::parse_submission(submission)?;
        Self::evaluate(&testcase, &submission)
    }
}
