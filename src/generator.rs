//! Seeded synthetic instances for benchmarks and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::WaveError;
use crate::instance::{Aisle, Bounds, Instance, Order};

/// Parameters of a synthetic instance.
///
/// # Examples
///
/// ```
/// use u_wavepick::generator::{GeneratorConfig, InstanceGenerator};
///
/// let config = GeneratorConfig::default()
///     .with_orders(4)
///     .with_aisles(3)
///     .with_seed(7);
/// let instance = InstanceGenerator::generate(&config).unwrap();
/// assert_eq!(instance.order_count(), 4);
/// assert_eq!(instance.aisle_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    pub orders: usize,
    pub aisles: usize,
    /// Size of the item catalogue.
    pub items: usize,
    /// Probability that an order demands (or an aisle stocks) a given item.
    pub density: f64,
    /// Demands are drawn from `1..=max_demand`.
    pub max_demand: i64,
    /// Capacities are drawn from `0..=max_capacity`.
    pub max_capacity: i64,
    /// Unit bounds of the instance.
    pub bounds: Bounds,
    /// Random seed.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            orders: 5,
            aisles: 5,
            items: 5,
            density: 0.4,
            max_demand: 3,
            max_capacity: 2,
            bounds: Bounds { lb: 5, ub: 12 },
            seed: 42,
        }
    }
}

impl GeneratorConfig {
    pub fn with_orders(mut self, n: usize) -> Self {
        self.orders = n;
        self
    }

    pub fn with_aisles(mut self, n: usize) -> Self {
        self.aisles = n;
        self
    }

    pub fn with_items(mut self, n: usize) -> Self {
        self.items = n;
        self
    }

    /// Sets the item density, clamped to `[0, 1]`.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_demand(mut self, n: i64) -> Self {
        self.max_demand = n;
        self
    }

    pub fn with_max_capacity(mut self, n: i64) -> Self {
        self.max_capacity = n;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Builds random instances. The same config always yields the same
/// instance.
pub struct InstanceGenerator;

impl InstanceGenerator {
    /// # Errors
    ///
    /// [`WaveError::MalformedInstance`] for invalid bounds, a density
    /// outside `[0, 1]`, or a `max_demand` below 1 / negative
    /// `max_capacity`.
    pub fn generate(config: &GeneratorConfig) -> Result<Instance, WaveError> {
        if !(0.0..=1.0).contains(&config.density) {
            return Err(WaveError::malformed(format!(
                "density {} outside [0, 1]",
                config.density
            )));
        }
        if config.max_demand < 1 || config.max_capacity < 0 {
            return Err(WaveError::malformed(format!(
                "max_demand {} / max_capacity {} out of range",
                config.max_demand, config.max_capacity
            )));
        }

        let mut rng = StdRng::seed_from_u64(config.seed);

        let orders = (0..config.orders)
            .map(|i| {
                let mut order = Order::new(format!("o{i}"));
                for item in 0..config.items {
                    if rng.random_bool(config.density) {
                        order = order.with_demand(item, rng.random_range(1..=config.max_demand));
                    }
                }
                order
            })
            .collect();

        let aisles = (0..config.aisles)
            .map(|j| {
                let mut aisle = Aisle::new(format!("c{j}"));
                for item in 0..config.items {
                    if rng.random_bool(config.density) {
                        aisle =
                            aisle.with_capacity(item, rng.random_range(0..=config.max_capacity));
                    }
                }
                aisle
            })
            .collect();

        Instance::new(orders, aisles, config.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let config = GeneratorConfig::default().with_seed(11);
        let a = InstanceGenerator::generate(&config).unwrap();
        let b = InstanceGenerator::generate(&config).unwrap();
        assert_eq!(a.orders(), b.orders());
        assert_eq!(a.aisles(), b.aisles());
    }

    #[test]
    fn test_shape() {
        let config = GeneratorConfig::default()
            .with_orders(3)
            .with_aisles(2)
            .with_items(4)
            .with_density(1.0);
        let inst = InstanceGenerator::generate(&config).unwrap();
        assert_eq!(inst.variable_count(), 5);
        assert!(inst.orders().iter().all(|o| o.demands.len() == 4));
        assert!(inst
            .orders()
            .iter()
            .flat_map(|o| &o.demands)
            .all(|(_, q)| (1..=3).contains(q)));
    }

    #[test]
    fn test_invalid_config() {
        let mut config = GeneratorConfig::default();
        config.density = 1.5;
        assert!(InstanceGenerator::generate(&config).is_err());

        let config = GeneratorConfig::default().with_max_demand(0);
        assert!(InstanceGenerator::generate(&config).is_err());

        let config = GeneratorConfig::default().with_bounds(Bounds { lb: 3, ub: 1 });
        assert!(InstanceGenerator::generate(&config).is_err());
    }
}
