//! Exhaustive wave selection for warehouse order picking.
//!
//! Given orders (item demands), aisles (item capacities) and a permissible
//! range `[LB, UB]` of total units, find every *wave* (subset of orders plus
//! subset of aisles) that is feasible, and pick the one that maximizes
//! productivity: collected units per selected aisle.
//!
//! - **Instance Model** ([`instance`]): validated, immutable orders, aisles
//!   and bounds.
//! - **Constraint Evaluator** ([`eval`]): unit range, per-item capacity and
//!   at-least-one-aisle checks for a single assignment.
//! - **Enumerator** ([`enumerate`]): lazy walk over all `2^n` binary
//!   assignments, with a search-space ceiling, optional block pruning and
//!   optional rayon parallelism (`parallel` feature).
//! - **Objective Ranker** ([`rank`]): best wave with a deterministic
//!   first-found tie-break.
//! - **Driver and reporting** ([`solve`], [`sweep`], [`report`]): one-call
//!   search, bounds sweeps and presenter-ready result data.
//! - **Synthetic instances** ([`generator`]): seeded random instances.
//!
//! # Example
//!
//! ```
//! use u_wavepick::enumerate::SearchConfig;
//! use u_wavepick::instance::{Aisle, Bounds, Instance, Order};
//! use u_wavepick::solve::WaveSolver;
//!
//! let instance = Instance::new(
//!     vec![
//!         Order::new("o0").with_demand("A", 3),
//!         Order::new("o1").with_demand("A", 2),
//!     ],
//!     vec![
//!         Aisle::new("c0").with_capacity("A", 4),
//!         Aisle::new("c1").with_capacity("A", 5),
//!     ],
//!     Bounds::new(2, 5)?,
//! )?;
//!
//! let result = WaveSolver::solve(&instance, &SearchConfig::default())?;
//! let best = result.best.solution().unwrap();
//! assert_eq!(best.total_units, 5);
//! assert_eq!(best.aisle_count, 1);
//! # Ok::<(), u_wavepick::WaveError>(())
//! ```
//!
//! This is not an optimization engine for large instances: the search is
//! exponential in the number of orders and aisles.

pub mod enumerate;
pub mod error;
pub mod eval;
pub mod generator;
pub mod instance;
pub mod rank;
pub mod report;
pub mod solve;
pub mod sweep;

pub use error::WaveError;
