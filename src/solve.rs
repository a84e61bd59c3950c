//! End-to-end wave search: enumerate, rank, time.

use std::time::{Duration, Instant};

use crate::enumerate::{Enumerator, SearchConfig, SolutionSet};
use crate::error::WaveError;
use crate::instance::Instance;
use crate::rank::BestWave;

/// Counters and timing of one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Size of the candidate space, `2^n`.
    pub candidates: u64,
    /// Candidates passed to the evaluator.
    pub evaluated: u64,
    /// Candidates skipped by block pruning.
    pub pruned: u64,
    /// Feasible solutions found.
    pub feasible: usize,
    /// Wall-clock time of the search.
    pub elapsed: Duration,
}

/// Result of a wave search: the solution set, the best wave and stats.
#[derive(Debug, Clone)]
pub struct WaveResult {
    pub solutions: SolutionSet,
    pub best: BestWave,
    pub stats: SearchStats,
}

/// Wave search driver.
pub struct WaveSolver;

impl WaveSolver {
    /// Enumerates all feasible waves of `instance` and selects the best.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_wavepick::instance::{Aisle, Bounds, Instance, Order};
    /// use u_wavepick::enumerate::SearchConfig;
    /// use u_wavepick::solve::WaveSolver;
    ///
    /// let instance = Instance::new(
    ///     vec![
    ///         Order::new("o0").with_demand("A", 3),
    ///         Order::new("o1").with_demand("A", 2),
    ///     ],
    ///     vec![
    ///         Aisle::new("c0").with_capacity("A", 4),
    ///         Aisle::new("c1").with_capacity("A", 5),
    ///     ],
    ///     Bounds::new(2, 5).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let result = WaveSolver::solve(&instance, &SearchConfig::default()).unwrap();
    /// assert_eq!(result.best.objective(), Some(5.0));
    /// ```
    ///
    /// # Errors
    ///
    /// [`WaveError::SearchSpaceTooLarge`] when the instance exceeds the
    /// configured ceiling.
    pub fn solve(instance: &Instance, config: &SearchConfig) -> Result<WaveResult, WaveError> {
        let start = Instant::now();
        let enumerator = Enumerator::new(instance, config)?;

        tracing::info!(
            orders = instance.order_count(),
            aisles = instance.aisle_count(),
            bounds = %instance.bounds(),
            candidates = enumerator.candidate_count(),
            "wave search started"
        );

        let (solutions, enum_stats) = enumerator.run()?;
        let best = solutions.best();

        let stats = SearchStats {
            candidates: enumerator.candidate_count(),
            evaluated: enum_stats.evaluated,
            pruned: enum_stats.pruned,
            feasible: solutions.len(),
            elapsed: start.elapsed(),
        };

        match &best {
            BestWave::Found(s) => tracing::info!(
                feasible = stats.feasible,
                objective = s.objective,
                total_units = s.total_units,
                aisles = s.aisle_count,
                elapsed_s = stats.elapsed.as_secs_f64(),
                "wave search finished"
            ),
            BestWave::NoFeasibleSolution => tracing::info!(
                elapsed_s = stats.elapsed.as_secs_f64(),
                "wave search finished without a feasible wave"
            ),
        }

        Ok(WaveResult {
            solutions,
            best,
            stats,
        })
    }
}
