//! Presentation data for a finished wave search.
//!
//! [`WaveReport`] is the shape a presenter consumes: one row per feasible
//! wave, the best wave, and the elapsed time. It performs no feasibility or
//! objective computation of its own. `Display` renders a plain-text
//! summary; chart rendering is left to the presenter, which can use
//! [`WaveReport::scatter_points`] and [`WaveReport::best_wave_table`].

use std::fmt;
use std::time::Duration;

use crate::eval::Assignment;
use crate::instance::Instance;
use crate::rank::BestWave;
use crate::solve::WaveResult;

/// One feasible wave, labelled with instance identifiers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportRow {
    /// `(variable id, 0/1)` pairs, orders first.
    pub assignment: Vec<(String, u8)>,
    pub total_units: u64,
    pub aisle_count: usize,
    pub objective: f64,
}

impl ReportRow {
    fn assignment_label(&self) -> String {
        let parts: Vec<String> = self
            .assignment
            .iter()
            .map(|(id, v)| format!("{id}: {v}"))
            .collect();
        format!("{{{}}}", parts.join(", "))
    }
}

/// A point of the (aisles, units) scatter chart, sized by objective.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScatterPoint {
    pub aisle_count: usize,
    pub total_units: u64,
    pub objective: f64,
}

/// 0/1 rows of the best wave, one cell per order and per aisle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestWaveTable {
    pub orders: Vec<(String, u8)>,
    pub aisles: Vec<(String, u8)>,
}

/// Report of one wave search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveReport {
    /// Feasible waves in enumeration order.
    pub rows: Vec<ReportRow>,
    /// Index into `rows` of the best wave.
    pub best: Option<usize>,
    pub elapsed: Duration,
    order_ids: Vec<String>,
    aisle_ids: Vec<String>,
}

impl WaveReport {
    /// Builds the report of `result`, labelling variables with the ids of
    /// `instance`.
    pub fn new(instance: &Instance, result: &WaveResult) -> Self {
        let order_ids: Vec<String> = instance.orders().iter().map(|o| o.id.clone()).collect();
        let aisle_ids: Vec<String> = instance.aisles().iter().map(|a| a.id.clone()).collect();

        let rows = result
            .solutions
            .iter()
            .map(|s| ReportRow {
                assignment: label(&order_ids, &aisle_ids, &s.assignment),
                total_units: s.total_units,
                aisle_count: s.aisle_count,
                objective: s.objective,
            })
            .collect();

        let best = match &result.best {
            BestWave::Found(b) => result.solutions.iter().position(|s| s.index == b.index),
            BestWave::NoFeasibleSolution => None,
        };

        Self {
            rows,
            best,
            elapsed: result.stats.elapsed,
            order_ids,
            aisle_ids,
        }
    }

    pub fn best_row(&self) -> Option<&ReportRow> {
        self.best.and_then(|i| self.rows.get(i))
    }

    pub fn scatter_points(&self) -> Vec<ScatterPoint> {
        self.rows
            .iter()
            .map(|r| ScatterPoint {
                aisle_count: r.aisle_count,
                total_units: r.total_units,
                objective: r.objective,
            })
            .collect()
    }

    pub fn best_wave_table(&self) -> Option<BestWaveTable> {
        let row = self.best_row()?;
        let (orders, aisles) = row.assignment.split_at(self.order_ids.len());
        Some(BestWaveTable {
            orders: orders.to_vec(),
            aisles: aisles.to_vec(),
        })
    }
}

fn label(order_ids: &[String], aisle_ids: &[String], a: &Assignment) -> Vec<(String, u8)> {
    order_ids
        .iter()
        .chain(aisle_ids)
        .cloned()
        .zip(a.values())
        .collect()
}

impl fmt::Display for WaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(best) = self.best_row() else {
            writeln!(f, "No feasible wave found.")?;
            return write!(f, "Elapsed: {:.4} s", self.elapsed.as_secs_f64());
        };

        writeln!(f, "Best wave:")?;
        writeln!(f, "{}", best.assignment_label())?;
        writeln!(f, "Total units: {}", best.total_units)?;
        writeln!(f, "Selected aisles: {}", best.aisle_count)?;
        writeln!(f, "Objective (units per aisle): {:.2}", best.objective)?;
        writeln!(f)?;
        writeln!(f, "Feasible waves:")?;
        writeln!(
            f,
            "{:<20} {:<15} {:<15} {:<10}",
            "Assignment", "Total Units", "Aisles", "Objective"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<20} {:<15} {:<15} {:<10.2}",
                row.assignment_label(),
                row.total_units,
                row.aisle_count,
                row.objective
            )?;
        }
        write!(f, "Elapsed: {:.4} s", self.elapsed.as_secs_f64())
    }
}
