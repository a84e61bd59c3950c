//! Exhaustive assignment enumeration.
//!
//! Generates every assignment in `{0,1}^(|orders| + |aisles|)` exactly once,
//! evaluates each one and yields the feasible ones as [`Solution`]s. The
//! enumeration is lazy ([`Enumerator::solutions`]) and restartable; callers
//! that want the whole [`SolutionSet`] use [`Enumerator::run`].
//!
//! Exponential by nature: [`SearchConfig::max_variables`] bounds the size
//! of accepted instances.

mod config;
mod runner;
mod types;

pub use config::{SearchConfig, HARD_VARIABLE_LIMIT};
pub use runner::{Candidates, Enumerator, Solutions};
pub use types::{objective_value, EnumerationStats, Solution, SolutionSet};
