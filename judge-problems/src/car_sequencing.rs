//! Car sequencing with option windows.
//!
//! Cars of several types must be placed on an assembly line. Each type
//! carries a subset of options, and each option station can handle at most
//! `capacity` cars with that option in any `size` consecutive positions. A
//! submission orders the cars and claims how many units of window overload
//! the order causes.
//!
//! Windows are anchored at every position from the first car to `size - 1`
//! positions past the last one, so windows near either end of the line
//! shrink instead of wrapping around.

use std::fmt;

use judge_core::{
    ConsistencyError, Document, FeasibilityError, Objective, ParseError, ParseErrorReason,
    Problem, ProblemFamily, Score, TextLines, VerificationError,
};
use log::debug;

use crate::join_tokens;

/// Car sequencing problem family.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarSequencing;

/// Window constraint of one option station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionWindow {
    /// Cars with the option allowed per window.
    pub capacity: usize,
    /// Number of consecutive positions per window.
    pub size: usize,
}

/// A declared car type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarType {
    /// Number of cars of this type to build.
    pub count: usize,
    /// One flag per option, in option order.
    pub options: Vec<bool>,
}

impl CarType {
    fn has_option(&self, option: usize) -> bool {
        self.options.get(option).copied().unwrap_or(false)
    }
}

/// Parsed car sequencing instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarSequencingTestcase {
    total_cars: usize,
    car_types: Vec<CarType>,
    windows: Vec<OptionWindow>,
}

impl CarSequencingTestcase {
    /// Number of cars in a complete sequence.
    #[must_use]
    pub const fn total_cars(&self) -> usize {
        self.total_cars
    }

    /// Car types, indexed by type id.
    #[must_use]
    pub fn car_types(&self) -> &[CarType] {
        &self.car_types
    }

    /// Option windows, indexed by option id.
    #[must_use]
    pub fn windows(&self) -> &[OptionWindow] {
        &self.windows
    }

    /// Total overload of a sequence of valid, 0-based type ids.
    ///
    /// Ids outside the declared range count as cars without options.
    #[must_use]
    pub fn violations(&self, sequence: &[usize]) -> u64 {
        self.windows
            .iter()
            .enumerate()
            .map(|(option, &window)| {
                let flags: Vec<u64> = sequence
                    .iter()
                    .map(|&car| {
                        let fitted = self
                            .car_types
                            .get(car)
                            .is_some_and(|car_type| car_type.has_option(option));
                        u64::from(fitted)
                    })
                    .collect();
                window_overload(&flags, window)
            })
            .fold(0, u64::saturating_add)
    }
}

/// Overload of one option over every anchored window.
///
/// Keeps a running count: the car at `pos` enters the window and the car at
/// `pos - size` leaves it. Windows anchored past the last car but before the
/// first departure all hold the same cars and are counted in one step, so the
/// cost is linear in the sequence length whatever the window size.
fn window_overload(flags: &[u64], window: OptionWindow) -> u64 {
    let capacity = u64::try_from(window.capacity).unwrap_or(u64::MAX);
    let excess = |taken: u64| taken.saturating_sub(capacity);
    let mut taken: u64 = 0;
    let mut overload: u64 = 0;

    for (pos, &entering) in flags.iter().enumerate() {
        taken = taken.saturating_add(entering);
        if let Some(&leaving) = pos.checked_sub(window.size).and_then(|left| flags.get(left)) {
            taken = taken.saturating_sub(leaving);
        }
        overload = overload.saturating_add(excess(taken));
    }

    let idle = u64::try_from(window.size.saturating_sub(flags.len())).unwrap_or(u64::MAX);
    overload = overload.saturating_add(idle.saturating_mul(excess(taken)));

    let draining = flags
        .get(flags.len().saturating_sub(window.size)..)
        .unwrap_or_default();
    for &leaving in draining {
        taken = taken.saturating_sub(leaving);
        overload = overload.saturating_add(excess(taken));
    }
    overload
}

/// Parsed car sequencing submission.
///
/// `Display` renders the submission text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarSequencingSubmission {
    /// Overload the submitter reports.
    pub claimed_violations: u64,
    /// 0-based type ids in line order.
    pub sequence: Vec<i64>,
}

impl fmt::Display for CarSequencingSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.claimed_violations)?;
        writeln!(f, "{}", join_tokens(&self.sequence))
    }
}

impl Problem for CarSequencing {
    type Testcase = CarSequencingTestcase;
    type Submission = CarSequencingSubmission;

    const FAMILY: ProblemFamily = ProblemFamily::CarSequencing;

    fn parse_testcase(text: &str) -> Result<CarSequencingTestcase, ParseError> {
        let mut lines = TextLines::new(Document::Testcase, text);
        let header = lines.next_line()?;
        header.expect_count(3)?;
        let total_cars: usize = header.integer_at(0)?;
        let option_count: usize = header.integer_at(1)?;
        let type_count: usize = header.integer_at(2)?;

        let capacities: Vec<usize> = lines.next_line()?.exact_integers(option_count)?;
        let sizes: Vec<usize> = lines.next_line()?.exact_integers(option_count)?;
        let windows = capacities
            .into_iter()
            .zip(sizes)
            .map(|(capacity, size)| OptionWindow { capacity, size })
            .collect();

        let car_types = (0..type_count)
            .map(|expected_id| -> Result<CarType, ParseError> {
                let line = lines.next_line()?;
                line.expect_count(option_count.saturating_add(2))?;
                let type_id: usize = line.integer_at(0)?;
                if type_id != expected_id {
                    return Err(line.error(ParseErrorReason::Mismatch {
                        field: "car type id",
                        expected: expected_id,
                        found: type_id,
                    }));
                }
                let count = line.integer_at(1)?;
                let options = (2..line.len())
                    .map(|index| -> Result<bool, ParseError> {
                        match line.integer_at::<u8>(index)? {
                            0 => Ok(false),
                            1 => Ok(true),
                            _ => Err(line.invalid_value(index, "0 or 1")),
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CarType { count, options })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let declared = car_types
            .iter()
            .fold(0_usize, |sum, car_type| sum.saturating_add(car_type.count));
        if declared != total_cars {
            return Err(header.error(ParseErrorReason::Mismatch {
                field: "total car count",
                expected: total_cars,
                found: declared,
            }));
        }

        Ok(CarSequencingTestcase {
            total_cars,
            car_types,
            windows,
        })
    }

    fn parse_submission(text: &str) -> Result<CarSequencingSubmission, ParseError> {
        let mut lines = TextLines::new(Document::Submission, text);
        let header = lines.next_line()?;
        header.expect_count(1)?;
        let claimed_violations = header.integer_at(0)?;
        let sequence = lines.next_line()?.integers()?;
        Ok(CarSequencingSubmission {
            claimed_violations,
            sequence,
        })
    }

    fn evaluate(
        testcase: &CarSequencingTestcase,
        submission: &CarSequencingSubmission,
    ) -> Result<Score, VerificationError> {
        let type_count = testcase.car_types.len();
        let mut tally = vec![0_usize; type_count];
        let mut sequence = Vec::with_capacity(submission.sequence.len());
        for &car in &submission.sequence {
            let slot = usize::try_from(car)
                .ok()
                .and_then(|id| tally.get_mut(id).map(|slot| (id, slot)));
            let Some((id, count)) = slot else {
                return Err(FeasibilityError::UnknownCarType {
                    car_type: car,
                    type_count,
                }
                .into());
            };
            *count = count.saturating_add(1);
            sequence.push(id);
        }

        for (car_type, (declared, &found)) in testcase.car_types.iter().zip(&tally).enumerate() {
            if declared.count != found {
                return Err(FeasibilityError::WrongTypeCount {
                    car_type,
                    expected: declared.count,
                    found,
                }
                .into());
            }
        }

        let violations = testcase.violations(&sequence);
        if violations != submission.claimed_violations {
            return Err(ConsistencyError::ScoreMismatch {
                family: Self::FAMILY,
                claimed: Objective::Integer(submission.claimed_violations),
                actual: Objective::Integer(violations),
            }
            .into());
        }

        debug!(
            "car sequencing submission accepted: {} cars, {violations} violations",
            sequence.len()
        );
        Ok(Score::new(Self::FAMILY, Objective::Integer(violations)))
    }
}
