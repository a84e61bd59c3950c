//! Solves a small 5-order / 5-aisle instance, prints the report, then
//! sweeps several (LB, UB) pairs.
//!
//! Run with `RUST_LOG=debug` to see search logs.

use tracing_subscriber::EnvFilter;
use u_wavepick::enumerate::SearchConfig;
use u_wavepick::instance::{Aisle, Bounds, Instance, Order};
use u_wavepick::report::WaveReport;
use u_wavepick::solve::WaveSolver;
use u_wavepick::sweep::BoundsSweep;
use u_wavepick::WaveError;

fn build_instance() -> Result<Instance, WaveError> {
    let demands: [&[(u32, i64)]; 5] = [
        &[(0, 3), (2, 1)],
        &[(1, 1), (3, 1)],
        &[(2, 1), (4, 2)],
        &[(0, 1), (2, 2), (3, 1), (4, 1)],
        &[(1, 1)],
    ];
    let capacities: [&[(u32, i64)]; 5] = [
        &[(0, 2), (1, 1), (2, 1), (4, 1)],
        &[(0, 2), (1, 1), (2, 2), (4, 1)],
        &[(1, 2), (3, 1), (4, 2)],
        &[(0, 2), (1, 1), (3, 1), (4, 1)],
        &[(1, 1), (2, 2), (3, 1), (4, 2)],
    ];

    let orders = demands
        .iter()
        .enumerate()
        .map(|(i, items)| {
            items
                .iter()
                .fold(Order::new(format!("o{i}")), |o, &(item, q)| o.with_demand(item, q))
        })
        .collect();
    let aisles = capacities
        .iter()
        .enumerate()
        .map(|(j, items)| {
            items
                .iter()
                .fold(Aisle::new(format!("c{j}")), |a, &(item, c)| a.with_capacity(item, c))
        })
        .collect();

    Instance::new(orders, aisles, Bounds::new(5, 12)?)
}

fn main() -> Result<(), WaveError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let instance = build_instance()?;
    let config = SearchConfig::default();

    let result = WaveSolver::solve(&instance, &config)?;
    println!("{}", WaveReport::new(&instance, &result));

    println!();
    println!("Bounds sweep:");
    let sweep = [Bounds::new(5, 12)?, Bounds::new(6, 15)?, Bounds::new(4, 10)?];
    for entry in BoundsSweep::run(&instance, &sweep, &config)? {
        match entry.best_objective {
            Some(obj) => println!(
                "LB = {}, UB = {} => best objective {:.2} ({} feasible waves)",
                entry.bounds.lb, entry.bounds.ub, obj, entry.feasible
            ),
            None => println!(
                "LB = {}, UB = {} => no feasible wave",
                entry.bounds.lb, entry.bounds.ub
            ),
        }
    }
    Ok(())
}
