//! Global feasibility check for a single assignment.

use super::assignment::Assignment;
use crate::error::WaveError;
use crate::instance::{Instance, ItemId};

/// The first global constraint an assignment violates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Violation {
    /// Total units below LB.
    BelowLowerBound { total_units: u64, lb: u64 },
    /// Total units above UB.
    AboveUpperBound { total_units: u64, ub: u64 },
    /// Selected aisles stock fewer units of `item` than the selected orders demand.
    InsufficientCapacity {
        item: ItemId,
        demand: u64,
        supply: u64,
    },
    /// No aisle is selected.
    NoAisleSelected,
}

/// Outcome of evaluating one assignment, with the aggregates computed
/// along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeasibilityResult {
    /// Whether every global constraint holds.
    pub feasible: bool,
    /// Sum of all units demanded by the selected orders.
    pub total_units: u64,
    /// Number of selected aisles.
    pub selected_aisle_count: usize,
    /// Sum of all capacities of the selected aisles.
    pub total_capacity: u64,
    /// The first violated constraint, in the order: unit range,
    /// capacity, aisle selected. `None` when feasible.
    pub violation: Option<Violation>,
}

/// Evaluates assignments against an instance's global constraints.
///
/// A wave is feasible when:
///
/// 1. `LB <= total_units <= UB`
/// 2. for every item the selected orders demand, the selected aisles
///    supply at least as many units
/// 3. at least one aisle is selected
///
/// # Examples
///
/// ```
/// use u_wavepick::eval::{Assignment, ConstraintEvaluator};
/// use u_wavepick::instance::{Aisle, Bounds, Instance, Order};
///
/// let instance = Instance::new(
///     vec![Order::new("o0").with_demand("A", 3)],
///     vec![Aisle::new("c0").with_capacity("A", 4)],
///     Bounds::new(2, 5).unwrap(),
/// )
/// .unwrap();
///
/// let evaluator = ConstraintEvaluator::new(&instance);
/// let result = evaluator
///     .evaluate(&Assignment::new(vec![true], vec![true]))
///     .unwrap();
/// assert!(result.feasible);
/// assert_eq!(result.total_units, 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstraintEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> ConstraintEvaluator<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Evaluates `assignment`.
    ///
    /// # Errors
    ///
    /// [`WaveError::IncompleteAssignment`] if the assignment does not
    /// cover exactly the instance's orders and aisles.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<FeasibilityResult, WaveError> {
        let inst = self.instance;
        if assignment.order_count() != inst.order_count()
            || assignment.aisle_count() != inst.aisle_count()
        {
            return Err(WaveError::IncompleteAssignment {
                expected_orders: inst.order_count(),
                expected_aisles: inst.aisle_count(),
                orders: assignment.order_count(),
                aisles: assignment.aisle_count(),
            });
        }

        let mut demand = vec![0u64; inst.item_count()];
        let mut supply = vec![0u64; inst.item_count()];
        let mut total_units = 0u64;
        let mut total_capacity = 0u64;
        let mut selected_aisle_count = 0usize;

        // No wrap: `Instance::new` bounds the all-orders and all-aisles
        // totals by u64::MAX.
        for i in assignment.selected_orders() {
            total_units += inst.order_units(i);
            for &(item, qty) in inst.order_demand(i) {
                demand[item] += qty;
            }
        }
        for j in assignment.selected_aisles() {
            selected_aisle_count += 1;
            for &(item, cap) in inst.aisle_supply(j) {
                supply[item] += cap;
                total_capacity += cap;
            }
        }

        let bounds = inst.bounds();
        let violation = if total_units < bounds.lower() {
            Some(Violation::BelowLowerBound {
                total_units,
                lb: bounds.lower(),
            })
        } else if total_units > bounds.upper() {
            Some(Violation::AboveUpperBound {
                total_units,
                ub: bounds.upper(),
            })
        } else if let Some(item) = (0..demand.len()).find(|&k| demand[k] > supply[k]) {
            Some(Violation::InsufficientCapacity {
                item: inst.items()[item].clone(),
                demand: demand[item],
                supply: supply[item],
            })
        } else if selected_aisle_count == 0 {
            Some(Violation::NoAisleSelected)
        } else {
            None
        };

        Ok(FeasibilityResult {
            feasible: violation.is_none(),
            total_units,
            selected_aisle_count,
            total_capacity,
            violation,
        })
    }

    /// Shorthand for `evaluate(..)?.feasible`.
    pub fn is_feasible(&self, assignment: &Assignment) -> Result<bool, WaveError> {
        Ok(self.evaluate(assignment)?.feasible)
    }
}
