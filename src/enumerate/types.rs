//! Solutions and solution sets.

use crate::eval::{Assignment, FeasibilityResult};
use crate::rank::{BestWave, ObjectiveRanker};

/// A feasible assignment with its derived metrics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Position in canonical enumeration order.
    pub index: u64,
    /// The wave: selected orders and aisles.
    pub assignment: Assignment,
    /// Units collected by the selected orders, within `[LB, UB]`.
    pub total_units: u64,
    /// Number of selected aisles (at least 1).
    pub aisle_count: usize,
    /// `total_units / aisle_count`.
    pub objective: f64,
}

impl Solution {
    pub(crate) fn new(index: u64, assignment: Assignment, result: &FeasibilityResult) -> Self {
        Self {
            index,
            assignment,
            total_units: result.total_units,
            aisle_count: result.selected_aisle_count,
            objective: objective_value(result.total_units, result.selected_aisle_count),
        }
    }
}

/// Productivity of a wave: units per selected aisle. Zero aisles score 0.
pub fn objective_value(total_units: u64, aisle_count: usize) -> f64 {
    if aisle_count == 0 {
        0.0
    } else {
        total_units as f64 / aisle_count as f64
    }
}

/// Every feasible solution of one search, ordered by enumeration index.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionSet {
    solutions: Vec<Solution>,
}

impl SolutionSet {
    /// Builds a set, ordering the solutions by enumeration index.
    pub fn from_vec(mut solutions: Vec<Solution>) -> Self {
        solutions.sort_by_key(|s| s.index);
        Self { solutions }
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn into_vec(self) -> Vec<Solution> {
        self.solutions
    }

    /// Enumeration indices of all solutions, ascending.
    pub fn indices(&self) -> Vec<u64> {
        self.solutions.iter().map(|s| s.index).collect()
    }

    /// Best solution under the ranker's tie-break.
    pub fn best(&self) -> BestWave {
        ObjectiveRanker::select_best(&self.solutions)
    }
}

impl FromIterator<Solution> for SolutionSet {
    fn from_iter<T: IntoIterator<Item = Solution>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

/// Counters from one enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationStats {
    /// Candidates passed to the evaluator.
    pub evaluated: u64,
    /// Candidates skipped by block pruning.
    pub pruned: u64,
}

impl EnumerationStats {
    pub fn merge(&mut self, other: EnumerationStats) {
        self.evaluated += other.evaluated;
        self.pruned += other.pruned;
    }

    /// Candidates accounted for (evaluated + pruned).
    pub fn visited(&self) -> u64 {
        self.evaluated + self.pruned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sol(index: u64, total_units: u64, aisle_count: usize) -> Solution {
        Solution {
            index,
            assignment: Assignment::empty(0, 0),
            total_units,
            aisle_count,
            objective: objective_value(total_units, aisle_count),
        }
    }

    #[test]
    fn test_objective_value() {
        assert_eq!(objective_value(5, 1), 5.0);
        assert_eq!(objective_value(7, 2), 3.5);
        assert_eq!(objective_value(7, 0), 0.0);
    }

    #[test]
    fn test_set_sorted_by_index() {
        let set: SolutionSet = vec![sol(9, 3, 1), sol(2, 4, 1), sol(5, 5, 1)]
            .into_iter()
            .collect();
        assert_eq!(set.indices(), vec![2, 5, 9]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_stats_merge() {
        let mut a = EnumerationStats {
            evaluated: 3,
            pruned: 4,
        };
        a.merge(EnumerationStats {
            evaluated: 1,
            pruned: 8,
        });
        assert_eq!(a.evaluated, 4);
        assert_eq!(a.pruned, 12);
        assert_eq!(a.visited(), 16);
    }
}
