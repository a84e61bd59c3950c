//! Objective ranking.
//!
//! The objective of a wave is its productivity: total collected units
//! divided by the number of selected aisles. [`ObjectiveRanker`] picks the
//! maximum, breaking ties by canonical enumeration order, and reports an
//! empty solution set as [`BestWave::NoFeasibleSolution`].

mod ranker;

pub use ranker::{BestWave, ObjectiveRanker};
