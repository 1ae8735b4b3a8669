//! Euclidean travelling salesman.
//!
//! A testcase lists points in the plane; a submission is a permutation of
//! their 1-based ids plus the claimed length of the closed tour through them.

use std::fmt;

use geo::Coord;
use judge_core::{
    ConsistencyError, Document, FeasibilityError, Objective, ParseError, Problem, ProblemFamily,
    Score, TextLines, VerificationError,
};
use log::debug;
use thiserror::Error;

use crate::join_tokens;

/// Largest accepted difference between claimed and computed tour length.
pub const LENGTH_TOLERANCE: f64 = 1e-3;

/// Travelling salesman problem family.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tsp;

/// Returned by [`TspTestcase::new`] when no points are supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a tour needs at least one point")]
pub struct EmptyTour;

/// Parsed TSP instance: at least one point, addressed by 1-based id.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use judge_problems::tsp::TspTestcase;
///
/// # fn main() -> Result<(), judge_problems::tsp::EmptyTour> {
/// let testcase = TspTestcase::new(vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 }])?;
/// assert_eq!(testcase.point(2), Some(Coord { x: 3.0, y: 4.0 }));
/// assert!(TspTestcase::new(Vec::new()).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TspTestcase {
    points: Vec<Coord<f64>>,
}

impl TspTestcase {
    /// Build a testcase from its points.
    ///
    /// # Errors
    /// Returns [`EmptyTour`] when `points` is empty.
    pub fn new(points: Vec<Coord<f64>>) -> Result<Self, EmptyTour> {
        if points.is_empty() {
            return Err(EmptyTour);
        }
        Ok(Self { points })
    }

    /// Points in declaration order.
    #[must_use]
    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    /// Look up a point by 1-based id.
    #[must_use]
    pub fn point(&self, vertex: i64) -> Option<Coord<f64>> {
        let position = usize::try_from(vertex).ok()?.checked_sub(1)?;
        self.points.get(position).copied()
    }
}

/// Parsed TSP submission.
///
/// `Display` renders the submission text format.
#[derive(Debug, Clone, PartialEq)]
pub struct TspSubmission {
    /// Tour length the submitter reports.
    pub claimed_length: f64,
    /// 1-based vertex ids in visiting order.
    pub route: Vec<i64>,
}

impl fmt::Display for TspSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.claimed_length)?;
        writeln!(f, "{}", join_tokens(&self.route))
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "Euclidean distance is floating-point by definition"
)]
fn distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    (from.x - to.x).hypot(from.y - to.y)
}

/// Length of the closed tour visiting `tour` in order and returning to the
/// first point.
#[must_use]
pub fn cycle_length(tour: &[Coord<f64>]) -> f64 {
    tour.iter()
        .zip(tour.iter().cycle().skip(1))
        .map(|(&from, &to)| distance(from, to))
        .sum()
}

impl Problem for Tsp {
    type Testcase = TspTestcase;
    type Submission = TspSubmission;

    const FAMILY: ProblemFamily = ProblemFamily::Tsp;

    fn parse_testcase(text: &str) -> Result<TspTestcase, ParseError> {
        let mut lines = TextLines::new(Document::Testcase, text);
        let header = lines.next_line()?;
        header.expect_count(1)?;
        let count: usize = header.integer_at(0)?;
        if count == 0 {
            return Err(header.invalid_value(0, "at least 1 point"));
        }

        let points = (0..count)
            .map(|_| -> Result<Coord<f64>, ParseError> {
                let line = lines.next_line()?;
                line.expect_count(2)?;
                Ok(Coord {
                    x: line.finite_float_at(0)?,
                    y: line.finite_float_at(1)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TspTestcase { points })
    }

    fn parse_submission(text: &str) -> Result<TspSubmission, ParseError> {
        let mut lines = TextLines::new(Document::Submission, text);
        let header = lines.next_line()?;
        header.expect_count(1)?;
        let claimed_length = header.float_at(0)?;
        let route = lines.next_line()?.integers()?;
        Ok(TspSubmission {
            claimed_length,
            route,
        })
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "tour lengths are compared within a tolerance"
    )]
    fn evaluate(
        testcase: &TspTestcase,
        submission: &TspSubmission,
    ) -> Result<Score, VerificationError> {
        let vertex_count = testcase.points.len();
        if submission.route.len() != vertex_count {
            return Err(FeasibilityError::WrongRouteLength {
                expected: vertex_count,
                found: submission.route.len(),
            }
            .into());
        }

        let mut occurrences = vec![0_u32; vertex_count];
        let mut tour = Vec::with_capacity(vertex_count);
        for &vertex in &submission.route {
            let invalid = FeasibilityError::InvalidVertex {
                vertex,
                vertex_count,
            };
            let position = usize::try_from(vertex)
                .ok()
                .and_then(|id| id.checked_sub(1))
                .ok_or_else(|| invalid.clone())?;
            let (Some(point), Some(seen)) =
                (testcase.points.get(position), occurrences.get_mut(position))
            else {
                return Err(invalid.into());
            };
            *seen = seen.saturating_add(1);
            if *seen > 1 {
                return Err(FeasibilityError::DuplicateVertex {
                    vertex: position.saturating_add(1),
                }
                .into());
            }
            tour.push(*point);
        }

        let length = cycle_length(&tour);
        let difference = (submission.claimed_length - length).abs();
        if difference.is_nan() || difference > LENGTH_TOLERANCE {
            return Err(ConsistencyError::ScoreMismatch {
                family: Self::FAMILY,
                claimed: Objective::Real(submission.claimed_length),
                actual: Objective::Real(length),
            }
            .into());
        }

        debug!("tsp submission accepted: {vertex_count} vertices, length {length}");
        Ok(Score::new(Self::FAMILY, Objective::Real(length)))
    }
}
