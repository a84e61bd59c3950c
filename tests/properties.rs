//! Property tests over seeded random instances.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use u_wavepick::enumerate::{Enumerator, SearchConfig, Solution};
use u_wavepick::eval::ConstraintEvaluator;
use u_wavepick::generator::{GeneratorConfig, InstanceGenerator};
use u_wavepick::instance::{Bounds, Instance};
use u_wavepick::rank::ObjectiveRanker;

fn instance_strategy() -> impl Strategy<Value = Instance> {
    (any::<u64>(), 0usize..=4, 0usize..=4, 1usize..=4, 0i64..=8, 0i64..=8).prop_map(
        |(seed, orders, aisles, items, lb, span)| {
            let config = GeneratorConfig::default()
                .with_orders(orders)
                .with_aisles(aisles)
                .with_items(items)
                .with_density(0.6)
                .with_max_capacity(3)
                .with_bounds(Bounds { lb, ub: lb + span })
                .with_seed(seed);
            InstanceGenerator::generate(&config).unwrap()
        },
    )
}

/// Checks the three global constraints directly on the raw orders and
/// aisles, without going through the evaluator.
fn satisfies_constraints(inst: &Instance, s: &Solution) -> bool {
    let mut demand: HashMap<String, i64> = HashMap::new();
    let mut supply: HashMap<String, i64> = HashMap::new();
    let mut total = 0i64;
    for (order, &on) in inst.orders().iter().zip(s.assignment.orders()) {
        if on {
            for (item, q) in &order.demands {
                *demand.entry(item.to_string()).or_default() += q;
                total += q;
            }
        }
    }
    for (aisle, &on) in inst.aisles().iter().zip(s.assignment.aisles()) {
        if on {
            for (item, c) in &aisle.capacities {
                *supply.entry(item.to_string()).or_default() += c;
            }
        }
    }
    let b = inst.bounds();
    let aisles = s.assignment.aisles().iter().filter(|&&x| x).count();
    b.lb <= total
        && total <= b.ub
        && aisles >= 1
        && demand
            .iter()
            .filter(|&(_, &d)| d > 0)
            .all(|(item, &d)| supply.get(item).copied().unwrap_or(0) >= d)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_candidates_visit_every_assignment_once(inst in instance_strategy()) {
        let e = Enumerator::new(&inst, &SearchConfig::default()).unwrap();
        let n = inst.variable_count();
        let mut seen = HashSet::new();
        let mut count = 0u64;
        for (idx, a) in e.candidates() {
            prop_assert_eq!(a.variable_count(), n);
            prop_assert!(seen.insert(a.index().unwrap()));
            prop_assert_eq!(a.index(), Some(idx));
            count += 1;
        }
        prop_assert_eq!(count, 1u64 << n);
    }

    #[test]
    fn prop_every_solution_is_feasible(inst in instance_strategy()) {
        let (set, stats) = Enumerator::new(&inst, &SearchConfig::default()).unwrap().run().unwrap();
        prop_assert_eq!(stats.visited(), 1u64 << inst.variable_count());

        let eval = ConstraintEvaluator::new(&inst);
        for s in &set {
            let r = eval.evaluate(&s.assignment).unwrap();
            prop_assert!(r.feasible);
            prop_assert_eq!(r.total_units, s.total_units);
            prop_assert_eq!(r.selected_aisle_count, s.aisle_count);
            prop_assert!(s.aisle_count >= 1);
            prop_assert!(satisfies_constraints(&inst, s));
        }
    }

    #[test]
    fn prop_no_feasible_assignment_missed(inst in instance_strategy()) {
        let e = Enumerator::new(&inst, &SearchConfig::default()).unwrap();
        let (set, _) = e.run().unwrap();
        let found: HashSet<u64> = set.indices().into_iter().collect();

        let eval = ConstraintEvaluator::new(&inst);
        for (idx, a) in e.candidates() {
            let feasible = eval.evaluate(&a).unwrap().feasible;
            prop_assert_eq!(feasible, found.contains(&idx));
        }
    }

    #[test]
    fn prop_enumeration_is_idempotent(inst in instance_strategy()) {
        let e = Enumerator::new(&inst, &SearchConfig::default()).unwrap();
        let (a, _) = e.run().unwrap();
        let (b, _) = e.run().unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.best(), b.best());
    }

    #[test]
    fn prop_pruning_does_not_change_results(inst in instance_strategy()) {
        let (a, _) = Enumerator::new(&inst, &SearchConfig::default()).unwrap().run().unwrap();
        let (b, _) = Enumerator::new(&inst, &SearchConfig::default().with_prune(false))
            .unwrap()
            .run()
            .unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_tightening_bounds_never_grows_set(
        inst in instance_strategy(),
        raise in 0i64..=3,
        lower in 0i64..=3,
    ) {
        let b = inst.bounds();
        let lb = (b.lb + raise).min(b.ub);
        let ub = (b.ub - lower).max(lb);
        let tight = inst.with_bounds(Bounds::new(lb, ub).unwrap()).unwrap();

        let (wide, _) = Enumerator::new(&inst, &SearchConfig::default()).unwrap().run().unwrap();
        let (narrow, _) = Enumerator::new(&tight, &SearchConfig::default()).unwrap().run().unwrap();
        prop_assert!(narrow.len() <= wide.len());

        let wide_idx: HashSet<u64> = wide.indices().into_iter().collect();
        prop_assert!(narrow.indices().iter().all(|i| wide_idx.contains(i)));
    }

    #[test]
    fn prop_best_is_maximal_and_first(inst in instance_strategy()) {
        let (set, _) = Enumerator::new(&inst, &SearchConfig::default()).unwrap().run().unwrap();
        match ObjectiveRanker::select_best(set.as_slice()).into_solution() {
            None => prop_assert!(set.is_empty()),
            Some(best) => {
                for s in &set {
                    let lhs = s.total_units as u128 * best.aisle_count as u128;
                    let rhs = best.total_units as u128 * s.aisle_count as u128;
                    prop_assert!(lhs <= rhs);
                    if lhs == rhs {
                        prop_assert!(s.index >= best.index);
                    }
                }
            }
        }
    }
}
