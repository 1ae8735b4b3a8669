//! Bounded knapsack.
//!
//! A testcase lists items with a profit and a weight; a submission picks
//! items by 1-based index and claims the profit of its pick. The pick must
//! fit the capacity and the claim must match exactly.

use std::collections::HashSet;
use std::fmt;

use judge_core::{
    ConsistencyError, Document, FeasibilityError, Objective, ParseError, Problem,
    ProblemFamily, Score, TextLines, VerificationError,
};
use log::{debug, warn};

use crate::join_tokens;

/// Knapsack problem family.
#[derive(Debug, Clone, Copy, Default)]
pub struct Knapsack;

/// One item of a knapsack testcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Profit earned by taking the item.
    pub profit: u64,
    /// Capacity consumed by the item.
    pub weight: u64,
}

/// Parsed knapsack instance.
///
/// # Examples
///
/// ```
/// use judge_problems::knapsack::{Item, KnapsackTestcase};
///
/// let testcase = KnapsackTestcase::new(10, vec![Item { profit: 10, weight: 5 }]);
/// assert_eq!(testcase.item(1), Some(Item { profit: 10, weight: 5 }));
/// assert_eq!(testcase.item(0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackTestcase {
    capacity: u64,
    items: Vec<Item>,
}

impl KnapsackTestcase {
    /// Build a testcase from its capacity and items.
    #[must_use]
    pub const fn new(capacity: u64, items: Vec<Item>) -> Self {
        Self { capacity, items }
    }

    /// Total weight the knapsack holds.
    #[must_use]
    pub const fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Items in declaration order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by 1-based index.
    #[must_use]
    pub fn item(&self, index: i64) -> Option<Item> {
        let position = usize::try_from(index).ok()?.checked_sub(1)?;
        self.items.get(position).copied()
    }
}

/// Parsed knapsack submission.
///
/// `Display` renders the submission text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSubmission {
    /// Profit the submitter reports.
    pub claimed_profit: u64,
    /// 1-based item indices, in submission order. Not deduplicated.
    pub taken: Vec<i64>,
}

impl fmt::Display for KnapsackSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.claimed_profit)?;
        writeln!(f, "{}", join_tokens(&self.taken))
    }
}

impl Problem for Knapsack {
    type Testcase = KnapsackTestcase;
    type Submission = KnapsackSubmission;

    const FAMILY: ProblemFamily = ProblemFamily::Knapsack;

    fn parse_testcase(text: &str) -> Result<KnapsackTestcase, ParseError> {
        let mut lines = TextLines::new(Document::Testcase, text);
        let header = lines.next_line()?;
        header.expect_count(2)?;
        let item_count: usize = header.integer_at(0)?;
        let capacity: u64 = header.integer_at(1)?;

        let items = (0..item_count)
            .map(|_| -> Result<Item, ParseError> {
                let line = lines.next_line()?;
                line.expect_count(2)?;
                Ok(Item {
                    profit: line.integer_at(0)?,
                    weight: line.integer_at(1)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(KnapsackTestcase::new(capacity, items))
    }

    fn parse_submission(text: &str) -> Result<KnapsackSubmission, ParseError> {
        let mut lines = TextLines::new(Document::Submission, text);
        let header = lines.next_line()?;
        header.expect_count(1)?;
        let claimed_profit = header.integer_at(0)?;
        let taken = lines.next_line_or_blank().integers()?;
        Ok(KnapsackSubmission {
            claimed_profit,
            taken,
        })
    }

    fn evaluate(
        testcase: &KnapsackTestcase,
        submission: &KnapsackSubmission,
    ) -> Result<Score, VerificationError> {
        let mut total_weight: u128 = 0;
        let mut total_profit: u128 = 0;
        let mut seen = HashSet::with_capacity(submission.taken.len());

        for &index in &submission.taken {
            let item = testcase
                .item(index)
                .ok_or(FeasibilityError::IndexOutOfRange {
                    item: index,
                    item_count: testcase.items.len(),
                })?;
            if !seen.insert(index) {
                // Repeats are summed again; flagged until the intended rule is settled.
                warn!("knapsack item {index} taken more than once; counting it again");
            }
            total_weight = total_weight.saturating_add(u128::from(item.weight));
            total_profit = total_profit.saturating_add(u128::from(item.profit));
        }

        if total_weight > u128::from(testcase.capacity) {
            return Err(FeasibilityError::CapacityExceeded {
                total_weight: u64::try_from(total_weight).unwrap_or(u64::MAX),
                capacity: testcase.capacity,
            }
            .into());
        }

        let actual = u64::try_from(total_profit).unwrap_or(u64::MAX);
        if total_profit != u128::from(submission.claimed_profit) {
            return Err(ConsistencyError::ScoreMismatch {
                family: Self::FAMILY,
                claimed: Objective::Integer(submission.claimed_profit),
                actual: Objective::Integer(actual),
            }
            .into());
        }

        debug!(
            "knapsack submission accepted: profit {actual}, weight {total_weight}/{}",
            testcase.capacity
        );
        Ok(Score::new(Self::FAMILY, Objective::Integer(actual)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use judge_core::{ErrorKind, ParseErrorReason};
    use rstest::{fixture, rstest};

    #[fixture]
    fn testcase() -> KnapsackTestcase {
        Knapsack::parse_testcase("3 10\n10 5\n20 4\n15 6\n").expect("valid testcase")
    }

    fn submit(claimed_profit: u64, taken: &[i64]) -> KnapsackSubmission {
        KnapsackSubmission {
            claimed_profit,
            taken: taken.to_vec(),
        }
    }

    #[rstest]
    fn parses_items_in_order(testcase: KnapsackTestcase) {
        assert_eq!(testcase.capacity(), 10);
        assert_eq!(
            testcase.items(),
            &[
                Item { profit: 10, weight: 5 },
                Item { profit: 20, weight: 4 },
                Item { profit: 15, weight: 6 },
            ]
        );
    }

    #[rstest]
    fn accepts_a_feasible_pick(testcase: KnapsackTestcase) {
        let score = Knapsack::evaluate(&testcase, &submit(30, &[1, 2])).expect("feasible");
        assert_eq!(score.value(), Objective::Integer(30));
        assert_eq!(score.family(), ProblemFamily::Knapsack);
    }

    #[rstest]
    fn accepts_an_empty_pick(testcase: KnapsackTestcase) {
        let submission = Knapsack::parse_submission("0\n\n").expect("valid submission");
        assert!(submission.taken.is_empty());
        assert_eq!(Knapsack::parse_submission("0\n"), Ok(submission.clone()));
        let score = Knapsack::evaluate(&testcase, &submission).expect("feasible");
        assert_eq!(score.value(), Objective::Integer(0));
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(-1)]
    fn rejects_out_of_range_items(testcase: KnapsackTestcase, #[case] item: i64) {
        let err = Knapsack::evaluate(&testcase, &submit(10, &[1, item])).expect_err("bad item");
        assert_eq!(
            err,
            VerificationError::Feasibility(FeasibilityError::IndexOutOfRange {
                item,
                item_count: 3,
            })
        );
    }

    #[rstest]
    fn index_errors_win_over_capacity_errors(testcase: KnapsackTestcase) {
        let err = Knapsack::evaluate(&testcase, &submit(45, &[1, 2, 3, 9])).expect_err("bad item");
        assert!(matches!(
            err,
            VerificationError::Feasibility(FeasibilityError::IndexOutOfRange { item: 9, .. })
        ));
    }

    #[rstest]
    fn rejects_overweight_picks(testcase: KnapsackTestcase) {
        let err = Knapsack::evaluate(&testcase, &submit(45, &[1, 2, 3])).expect_err("too heavy");
        assert_eq!(
            err,
            VerificationError::Feasibility(FeasibilityError::CapacityExceeded {
                total_weight: 15,
                capacity: 10,
            })
        );
    }

    #[rstest]
    fn rejects_wrong_claims(testcase: KnapsackTestcase) {
        let err = Knapsack::evaluate(&testcase, &submit(31, &[1, 2])).expect_err("mismatch");
        assert_eq!(err.kind(), ErrorKind::Consistency);
        assert_eq!(err.to_string(), "wrong profit reported: got 31, actual 30");
    }

    #[rstest]
    fn repeated_items_are_counted_each_time(testcase: KnapsackTestcase) {
        let score = Knapsack::evaluate(&testcase, &submit(40, &[2, 2])).expect("double counted");
        assert_eq!(score.value(), Objective::Integer(40));
    }

    #[rstest]
    fn overflowing_weights_exceed_capacity() {
        let testcase = KnapsackTestcase::new(
            u64::MAX,
            vec![Item {
                profit: 1,
                weight: u64::MAX,
            }],
        );
        let err = Knapsack::evaluate(&testcase, &submit(2, &[1, 1])).expect_err("overflow");
        assert_eq!(
            err,
            VerificationError::Feasibility(FeasibilityError::CapacityExceeded {
                total_weight: u64::MAX,
                capacity: u64::MAX,
            })
        );
    }

    #[rstest]
    #[case("3 10\n10 5\n20 4\n", 4, ParseErrorReason::MissingLine)]
    #[case(
        "1 10\n10\n",
        2,
        ParseErrorReason::TokenCount { expected: 2, found: 1 }
    )]
    #[case(
        "1 ten\n10 5\n",
        1,
        ParseErrorReason::InvalidInteger { column: 2, token: "ten".into() }
    )]
    #[case(
        "1 10\n-3 5\n",
        2,
        ParseErrorReason::InvalidInteger { column: 1, token: "-3".into() }
    )]
    fn reports_malformed_testcases(
        #[case] text: &str,
        #[case] line: usize,
        #[case] reason: ParseErrorReason,
    ) {
        let err = Knapsack::parse_testcase(text).expect_err("malformed");
        assert_eq!(err, ParseError::new(Document::Testcase, line, reason));
    }

    #[rstest]
    #[case("")]
    #[case("30 1\n1 2\n")]
    #[case("thirty\n1 2\n")]
    #[case("30\n1 x\n")]
    fn reports_malformed_submissions(#[case] text: &str) {
        let err = Knapsack::parse_submission(text).expect_err("malformed");
        assert_eq!(err.document, Document::Submission);
    }

    #[rstest]
    fn display_renders_the_submission_format() {
        let submission = submit(30, &[1, 2]);
        let text = submission.to_string();
        assert_eq!(text, "30\n1 2\n");
        assert_eq!(Knapsack::parse_submission(&text), Ok(submission));
    }
}
