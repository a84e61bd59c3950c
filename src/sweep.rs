//! Bounds sweep: re-run the search under several (LB, UB) pairs.

use crate::enumerate::SearchConfig;
use crate::error::WaveError;
use crate::instance::{Bounds, Instance};
use crate::solve::WaveSolver;

/// Best objective under one pair of bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepEntry {
    pub bounds: Bounds,
    /// Best objective, `None` if no wave is feasible.
    pub best_objective: Option<f64>,
    /// Number of feasible waves.
    pub feasible: usize,
}

/// Runs the wave search once per bounds configuration.
pub struct BoundsSweep;

impl BoundsSweep {
    /// Solves `instance` under each entry of `bounds`, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid bounds ([`WaveError::MalformedInstance`])
    /// or search error.
    pub fn run(
        instance: &Instance,
        bounds: &[Bounds],
        config: &SearchConfig,
    ) -> Result<Vec<SweepEntry>, WaveError> {
        bounds
            .iter()
            .map(|&b| {
                let variant = instance.with_bounds(b)?;
                let result = WaveSolver::solve(&variant, config)?;
                tracing::debug!(bounds = %b, feasible = result.stats.feasible, "sweep step");
                Ok(SweepEntry {
                    bounds: b,
                    best_objective: result.best.objective(),
                    feasible: result.stats.feasible,
                })
            })
            .collect()
    }
}
