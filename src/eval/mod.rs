//! Constraint evaluation.
//!
//! [`ConstraintEvaluator`] checks one [`Assignment`] against the global
//! wave constraints (unit range, aisle capacity, at least one aisle) and
//! returns a [`FeasibilityResult`] carrying the aggregates it computed, so
//! the ranker can score a solution without recomputing them.
//!
//! Evaluation is pure and deterministic; it is the innermost loop of the
//! enumeration.

mod assignment;
mod evaluator;

pub use assignment::{Assignment, Variable};
pub use evaluator::{ConstraintEvaluator, FeasibilityResult, Violation};
