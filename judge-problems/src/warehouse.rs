//! Capacitated warehouse location with fractional assignment.
//!
//! A testcase describes warehouses (capacity and opening cost), customer
//! demands and the cost of serving each customer from each warehouse. A
//! submission is a matrix of fractions, one row per customer, saying which
//! share of the customer's demand each warehouse serves. There is no claimed
//! value; the score is the total cost of the assignment.

use std::fmt;

use judge_core::{
    AssignmentDefect, Document, FeasibilityError, Objective, ParseError, Problem, ProblemFamily,
    Score, TextLines, VerificationError,
};
use log::debug;

use crate::join_tokens;

/// Largest demand a customer may be left short by.
pub const DEMAND_SLACK: f64 = 1e-6;

/// Largest amount a warehouse may be overfilled by.
pub const CAPACITY_SLACK: f64 = 1e-6;

/// Warehouse location problem family.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarehouseLocation;

/// One candidate warehouse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Warehouse {
    /// Total demand the warehouse can serve.
    pub capacity: f64,
    /// Cost paid once if the warehouse serves anything.
    pub open_cost: f64,
}

/// Parsed warehouse location instance.
///
/// Dimensions are consistent by construction: every serve-cost row has one
/// entry per customer.
#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseTestcase {
    warehouses: Vec<Warehouse>,
    demands: Vec<f64>,
    serve_costs: Vec<Vec<f64>>,
}

impl WarehouseTestcase {
    /// Warehouses in declaration order.
    #[must_use]
    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    /// Customer demands in declaration order.
    #[must_use]
    pub fn demands(&self) -> &[f64] {
        &self.demands
    }

    /// Cost of serving `customer` entirely from `warehouse`, both 0-based.
    #[must_use]
    pub fn serve_cost(&self, warehouse: usize, customer: usize) -> Option<f64> {
        self.serve_costs.get(warehouse)?.get(customer).copied()
    }
}

/// Parsed warehouse location submission.
///
/// `Display` renders the submission text format.
#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseSubmission {
    /// Fractions indexed `[customer][warehouse]`.
    pub assignment: Vec<Vec<f64>>,
}

impl fmt::Display for WarehouseSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.assignment {
            writeln!(f, "{}", join_tokens(row))?;
        }
        Ok(())
    }
}

impl Problem for WarehouseLocation {
    type Testcase = WarehouseTestcase;
    type Submission = WarehouseSubmission;

    const FAMILY: ProblemFamily = ProblemFamily::WarehouseLocation;

    fn parse_testcase(text: &str) -> Result<WarehouseTestcase, ParseError> {
        let mut lines = TextLines::new(Document::Testcase, text);
        let header = lines.next_line()?;
        header.expect_count(2)?;
        let warehouse_count: usize = header.integer_at(0)?;
        let customer_count: usize = header.integer_at(1)?;

        let warehouses = (0..warehouse_count)
            .map(|_| -> Result<Warehouse, ParseError> {
                let line = lines.next_line()?;
                line.expect_count(2)?;
                Ok(Warehouse {
                    capacity: line.non_negative_float_at(0)?,
                    open_cost: line.non_negative_float_at(1)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let demands = lines
            .next_line()?
            .exact_non_negative_floats(customer_count)?;

        let serve_costs = (0..warehouse_count)
            .map(|_| lines.next_line()?.exact_non_negative_floats(customer_count))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WarehouseTestcase {
            warehouses,
            demands,
            serve_costs,
        })
    }

    fn parse_submission(text: &str) -> Result<WarehouseSubmission, ParseError> {
        let assignment = TextLines::new(Document::Submission, text.trim_end())
            .map(|row| row.floats())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(WarehouseSubmission { assignment })
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "demands, capacities and costs are real-valued"
    )]
    fn evaluate(
        testcase: &WarehouseTestcase,
        submission: &WarehouseSubmission,
    ) -> Result<Score, VerificationError> {
        let warehouse_count = testcase.warehouses.len();
        let rows = &submission.assignment;
        if rows.len() != testcase.demands.len() {
            return Err(AssignmentDefect::CustomerCount {
                expected: testcase.demands.len(),
                found: rows.len(),
            }
            .into());
        }

        let mut residual: Vec<f64> = testcase
            .warehouses
            .iter()
            .map(|warehouse| warehouse.capacity)
            .collect();
        let mut serve_cost = 0.0;

        for (customer, (row, &demand)) in rows.iter().zip(&testcase.demands).enumerate() {
            if row.len() != warehouse_count {
                return Err(AssignmentDefect::WarehouseCount {
                    customer,
                    expected: warehouse_count,
                    found: row.len(),
                }
                .into());
            }

            let mut unmet = demand;
            let served_from = row
                .iter()
                .zip(residual.iter_mut())
                .zip(&testcase.serve_costs);
            for (warehouse, ((&fraction, left), costs)) in served_from.enumerate() {
                if !(0.0..=1.0).contains(&fraction) {
                    return Err(AssignmentDefect::FractionOutOfRange {
                        customer,
                        warehouse,
                        value: fraction,
                    }
                    .into());
                }
                let served = fraction * demand;
                *left -= served;
                unmet -= served;
                serve_cost += fraction * costs.get(customer).copied().unwrap_or_default();
            }

            if unmet > DEMAND_SLACK {
                return Err(FeasibilityError::DemandNotMet { customer, unmet }.into());
            }
        }

        let mut open_cost = 0.0;
        for (warehouse, (site, &left)) in testcase.warehouses.iter().zip(&residual).enumerate() {
            if left < -CAPACITY_SLACK {
                return Err(FeasibilityError::WarehouseCapacityExceeded {
                    warehouse,
                    overflow: -left,
                }
                .into());
            }
            // Any consumption opens the warehouse, however small.
            if left < site.capacity {
                open_cost += site.open_cost;
                let used = site.capacity - left;
                if used <= CAPACITY_SLACK {
                    debug!("warehouse {warehouse} opened by a negligible load of {used}");
                }
            }
        }

        let total = open_cost + serve_cost;
        debug!(
            "warehouse location submission accepted: {} customers, cost {total}",
            rows.len()
        );
        Ok(Score::new(Self::FAMILY, Objective::Real(total)))
    }
}
