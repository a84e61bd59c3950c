//! Objective ranking of feasible waves.

use std::cmp::Ordering;

use crate::enumerate::Solution;

/// Outcome of selecting the best wave.
///
/// An empty solution set is a normal business outcome ("no wave fits these
/// bounds"), not an error.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BestWave {
    /// The highest-productivity wave.
    Found(Solution),
    /// No assignment satisfied the global constraints.
    NoFeasibleSolution,
}

impl BestWave {
    pub fn is_found(&self) -> bool {
        matches!(self, BestWave::Found(_))
    }

    /// The selected solution, if any.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            BestWave::Found(s) => Some(s),
            BestWave::NoFeasibleSolution => None,
        }
    }

    /// Objective value of the selected solution, if any.
    pub fn objective(&self) -> Option<f64> {
        self.solution().map(|s| s.objective)
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            BestWave::Found(s) => Some(s),
            BestWave::NoFeasibleSolution => None,
        }
    }
}

/// Ranks solutions by units per aisle.
///
/// Objectives are compared exactly by cross-multiplying
/// `total_units * other.aisle_count`, so ties are real ties. Ties go to
/// the solution with the lowest enumeration index.
pub struct ObjectiveRanker;

impl ObjectiveRanker {
    /// Compares two solutions by objective value alone.
    pub fn compare_objective(a: &Solution, b: &Solution) -> Ordering {
        let lhs = u128::from(a.total_units) * b.aisle_count as u128;
        let rhs = u128::from(b.total_units) * a.aisle_count as u128;
        lhs.cmp(&rhs)
    }

    /// Total preference order: higher objective first, then lower
    /// enumeration index.
    pub fn compare(a: &Solution, b: &Solution) -> Ordering {
        Self::compare_objective(b, a).then(a.index.cmp(&b.index))
    }

    /// Selects the solution with the strictly maximal objective value.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_wavepick::instance::{Aisle, Bounds, Instance, Order};
    /// use u_wavepick::enumerate::{Enumerator, SearchConfig};
    /// use u_wavepick::rank::{BestWave, ObjectiveRanker};
    ///
    /// let instance = Instance::new(
    ///     vec![Order::new("o0").with_demand("A", 3)],
    ///     vec![Aisle::new("c0").with_capacity("A", 1)],
    ///     Bounds::new(1, 5).unwrap(),
    /// )
    /// .unwrap();
    /// let (set, _) = Enumerator::new(&instance, &SearchConfig::default())
    ///     .unwrap()
    ///     .run()
    ///     .unwrap();
    /// assert_eq!(
    ///     ObjectiveRanker::select_best(set.as_slice()),
    ///     BestWave::NoFeasibleSolution
    /// );
    /// ```
    pub fn select_best(solutions: &[Solution]) -> BestWave {
        let best = solutions
            .iter()
            .min_by(|a, b| Self::compare(a, b));
        match best {
            Some(s) => BestWave::Found(s.clone()),
            None => BestWave::NoFeasibleSolution,
        }
    }

    /// All solutions, best first.
    pub fn rank(solutions: &[Solution]) -> Vec<&Solution> {
        let mut ranked: Vec<&Solution> = solutions.iter().collect();
        ranked.sort_by(|a, b| Self::compare(a, b));
        ranked
    }
}
