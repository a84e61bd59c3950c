//! Exhaustive enumeration of assignments.
//!
//! # Algorithm
//!
//! 1. Reject the instance if `n = |orders| + |aisles|` exceeds the ceiling
//! 2. Walk a binary counter from `0` to `2^n - 1`; variable `k` is bit
//!    `n - 1 - k`, so orders occupy the high bits and every order subset
//!    owns a contiguous block of `2^|aisles|` candidates
//! 3. With pruning, skip any block whose order total lies outside
//!    `[LB, UB]`; no candidate in it can be feasible
//! 4. Evaluate the remaining candidates and yield the feasible ones

use std::ops::Range;

use super::config::SearchConfig;
use super::types::{EnumerationStats, Solution, SolutionSet};
use crate::error::WaveError;
use crate::eval::{Assignment, ConstraintEvaluator};
use crate::instance::Instance;

/// Exhaustive assignment enumerator over one instance.
///
/// # Examples
///
/// ```
/// use u_wavepick::enumerate::{Enumerator, SearchConfig};
/// use u_wavepick::instance::{Aisle, Bounds, Instance, Order};
///
/// let instance = Instance::new(
///     vec![Order::new("o0").with_demand("A", 3)],
///     vec![Aisle::new("c0").with_capacity("A", 4)],
///     Bounds::new(2, 5).unwrap(),
/// )
/// .unwrap();
///
/// let enumerator = Enumerator::new(&instance, &SearchConfig::default()).unwrap();
/// assert_eq!(enumerator.candidate_count(), 4);
///
/// let solutions: Vec<_> = enumerator.solutions().collect::<Result<_, _>>().unwrap();
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions[0].index, 0b11);
/// ```
#[derive(Debug, Clone)]
pub struct Enumerator<'a> {
    instance: &'a Instance,
    config: SearchConfig,
}

impl<'a> Enumerator<'a> {
    /// Creates an enumerator.
    ///
    /// # Errors
    ///
    /// [`WaveError::SearchSpaceTooLarge`] if the instance has more
    /// variables than [`SearchConfig::variable_limit`].
    pub fn new(instance: &'a Instance, config: &SearchConfig) -> Result<Self, WaveError> {
        let variables = instance.variable_count();
        let limit = config.variable_limit();
        if variables > limit {
            tracing::warn!(variables, limit, "search space rejected");
            return Err(WaveError::SearchSpaceTooLarge { variables, limit });
        }
        Ok(Self {
            instance,
            config: config.clone(),
        })
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of candidate assignments, `2^n`.
    pub fn candidate_count(&self) -> u64 {
        1u64 << self.instance.variable_count()
    }

    /// Every candidate assignment, feasible or not, in enumeration order.
    pub fn candidates(&self) -> Candidates {
        Candidates {
            next: 0,
            end: self.candidate_count(),
            order_count: self.instance.order_count(),
            aisle_count: self.instance.aisle_count(),
        }
    }

    /// Lazily yields the feasible solutions in enumeration order.
    ///
    /// The iterator stops after the first evaluation error. Each call
    /// starts a fresh enumeration.
    pub fn solutions(&self) -> Solutions<'a> {
        self.solutions_in(0..self.candidate_count())
    }

    fn solutions_in(&self, range: Range<u64>) -> Solutions<'a> {
        Solutions {
            evaluator: ConstraintEvaluator::new(self.instance),
            start: range.start,
            next: range.start,
            end: range.end,
            block: 1u64 << self.instance.aisle_count(),
            prune: self.config.prune,
            done: false,
            stats: EnumerationStats::default(),
        }
    }

    /// Runs the full enumeration and materializes the solution set.
    ///
    /// Uses rayon workers when `config.parallel` is set and the
    /// `parallel` feature is enabled; the result is the same either way.
    pub fn run(&self) -> Result<(SolutionSet, EnumerationStats), WaveError> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return self.run_parallel();
        }
        self.run_sequential()
    }

    fn run_sequential(&self) -> Result<(SolutionSet, EnumerationStats), WaveError> {
        let mut iter = self.solutions();
        let solutions = iter.by_ref().collect::<Result<Vec<_>, _>>()?;
        let stats = iter.stats();
        tracing::debug!(
            evaluated = stats.evaluated,
            pruned = stats.pruned,
            "sequential enumeration finished"
        );
        Ok((SolutionSet::from_vec(solutions), stats))
    }

    #[cfg(feature = "parallel")]
    fn run_parallel(&self) -> Result<(SolutionSet, EnumerationStats), WaveError> {
        use rayon::prelude::*;

        let total = self.candidate_count();
        let workers = (rayon::current_num_threads() as u64 * 4).max(1);
        let chunk = total.div_ceil(workers).max(1);
        let chunk_count = total.div_ceil(chunk) as usize;

        // Each worker fills its own buffer; merged and re-sorted below.
        let parts = (0..chunk_count)
            .into_par_iter()
            .map(|c| -> Result<_, WaveError> {
                let start = c as u64 * chunk;
                let end = (start + chunk).min(total);
                let mut iter = self.solutions_in(start..end);
                let found = iter.by_ref().collect::<Result<Vec<_>, _>>()?;
                Ok((found, iter.stats()))
            })
            .collect::<Result<Vec<_>, WaveError>>()?;

        let mut stats = EnumerationStats::default();
        let mut solutions = Vec::new();
        for (found, part_stats) in parts {
            stats.merge(part_stats);
            solutions.extend(found);
        }
        tracing::debug!(
            chunks = chunk_count,
            evaluated = stats.evaluated,
            pruned = stats.pruned,
            "parallel enumeration finished"
        );
        Ok((SolutionSet::from_vec(solutions), stats))
    }
}

/// Iterator over all `2^n` candidate assignments with their indices.
#[derive(Debug, Clone)]
pub struct Candidates {
    next: u64,
    end: u64,
    order_count: usize,
    aisle_count: usize,
}

impl Iterator for Candidates {
    type Item = (u64, Assignment);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some((
            index,
            Assignment::from_index(index, self.order_count, self.aisle_count),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Lazy sequence of feasible solutions.
#[derive(Debug, Clone)]
pub struct Solutions<'a> {
    evaluator: ConstraintEvaluator<'a>,
    start: u64,
    next: u64,
    end: u64,
    block: u64,
    prune: bool,
    done: bool,
    stats: EnumerationStats,
}

impl Solutions<'_> {
    /// Counters accumulated so far.
    pub fn stats(&self) -> EnumerationStats {
        self.stats
    }

    /// Total units of the order subset encoded in the high bits of `index`.
    fn order_units(&self, index: u64) -> u64 {
        let inst = self.evaluator.instance();
        let n = inst.order_count();
        let bits = index >> inst.aisle_count();
        (0..n)
            .filter(|&i| (bits >> (n - 1 - i)) & 1 == 1)
            .map(|i| inst.order_units(i))
            .sum()
    }
}

impl Iterator for Solutions<'_> {
    type Item = Result<Solution, WaveError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done && self.next < self.end {
            let index = self.next;

            if self.prune && (index % self.block == 0 || index == self.start) {
                let bounds = self.evaluator.instance().bounds();
                if !bounds.contains(self.order_units(index)) {
                    let block_end = (index - index % self.block + self.block).min(self.end);
                    self.stats.pruned += block_end - index;
                    self.next = block_end;
                    continue;
                }
            }

            self.next += 1;
            self.stats.evaluated += 1;
            let inst = self.evaluator.instance();
            let assignment = Assignment::from_index(index, inst.order_count(), inst.aisle_count());
            match self.evaluator.evaluate(&assignment) {
                Ok(result) if result.feasible => {
                    return Some(Ok(Solution::new(index, assignment, &result)));
                }
                Ok(_) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
