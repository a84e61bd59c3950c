//! Validated problem instance.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::types::{Aisle, Bounds, ItemId, Order};
use crate::error::WaveError;

/// An immutable wave-selection instance.
///
/// Holds the declared orders and aisles, the unit bounds, and a compiled
/// form in which every item is a dense index. The compiled form is what
/// the evaluator reads in its inner loop.
///
/// # Examples
///
/// ```
/// use u_wavepick::instance::{Aisle, Bounds, Instance, Order};
///
/// let instance = Instance::new(
///     vec![Order::new("o0").with_demand("A", 3)],
///     vec![Aisle::new("c0").with_capacity("A", 4)],
///     Bounds::new(2, 5).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(instance.variable_count(), 2);
/// assert_eq!(instance.item_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    orders: Vec<Order>,
    aisles: Vec<Aisle>,
    bounds: Bounds,
    items: Vec<ItemId>,
    order_demand: Vec<Vec<(usize, u64)>>,
    order_units: Vec<u64>,
    max_total_units: u64,
    aisle_supply: Vec<Vec<(usize, u64)>>,
}

impl Instance {
    /// Validates and compiles an instance.
    ///
    /// # Errors
    ///
    /// [`WaveError::MalformedInstance`] when a demand or capacity is
    /// negative, the bounds are invalid, an order/aisle id repeats, or the
    /// units of all orders (or the capacity of all aisles) exceed `u64::MAX`.
    pub fn new(orders: Vec<Order>, aisles: Vec<Aisle>, bounds: Bounds) -> Result<Self, WaveError> {
        bounds.validate()?;
        check_unique(orders.iter().map(|o| o.id.as_str()), "order")?;
        check_unique(aisles.iter().map(|a| a.id.as_str()), "aisle")?;

        let mut index: HashMap<ItemId, usize> = HashMap::new();
        let mut items = Vec::new();

        let mut order_demand = Vec::with_capacity(orders.len());
        let mut order_units: Vec<u64> = Vec::with_capacity(orders.len());
        let mut max_total_units = 0u64;
        for order in &orders {
            let compiled = compile(&order.id, &order.demands, "demand", &mut index, &mut items)?;
            let units = checked_total(&compiled, &order.id, "demand")?;
            max_total_units = max_total_units
                .checked_add(units)
                .ok_or_else(|| WaveError::malformed("total demand of all orders overflows u64"))?;
            order_units.push(units);
            order_demand.push(compiled);
        }

        // Bounding the grand totals keeps every per-wave sum in u64.
        let mut aisle_supply = Vec::with_capacity(aisles.len());
        let mut all_capacity = 0u64;
        for aisle in &aisles {
            let compiled = compile(
                &aisle.id,
                &aisle.capacities,
                "capacity",
                &mut index,
                &mut items,
            )?;
            all_capacity = all_capacity
                .checked_add(checked_total(&compiled, &aisle.id, "capacity")?)
                .ok_or_else(|| {
                    WaveError::malformed("total capacity of all aisles overflows u64")
                })?;
            aisle_supply.push(compiled);
        }

        Ok(Self {
            orders,
            aisles,
            bounds,
            items,
            order_demand,
            order_units,
            max_total_units,
            aisle_supply,
        })
    }

    /// Returns a copy of this instance with different bounds.
    pub fn with_bounds(&self, bounds: Bounds) -> Result<Self, WaveError> {
        bounds.validate()?;
        let mut copy = self.clone();
        copy.bounds = bounds;
        Ok(copy)
    }

    /// Orders in declared order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Aisles in declared order.
    pub fn aisles(&self) -> &[Aisle] {
        &self.aisles
    }

    /// Unit bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Distinct items, in order of first appearance.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn aisle_count(&self) -> usize {
        self.aisles.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of binary decision variables (orders + aisles).
    pub fn variable_count(&self) -> usize {
        self.orders.len() + self.aisles.len()
    }

    /// Largest achievable wave size: all orders selected.
    pub fn max_total_units(&self) -> u64 {
        self.max_total_units
    }

    /// Total units of order `i` (sum of its demanded quantities).
    pub(crate) fn order_units(&self, i: usize) -> u64 {
        self.order_units[i]
    }

    pub(crate) fn order_demand(&self, i: usize) -> &[(usize, u64)] {
        &self.order_demand[i]
    }

    pub(crate) fn aisle_supply(&self, j: usize) -> &[(usize, u64)] {
        &self.aisle_supply[j]
    }
}

fn check_unique<'a>(ids: impl Iterator<Item = &'a str>, kind: &str) -> Result<(), WaveError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(WaveError::malformed(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(())
}

/// Converts (item, quantity) pairs into sorted (dense index, quantity)
/// pairs, summing repeats and dropping zeros.
fn compile(
    owner: &str,
    entries: &[(ItemId, i64)],
    what: &str,
    index: &mut HashMap<ItemId, usize>,
    items: &mut Vec<ItemId>,
) -> Result<Vec<(usize, u64)>, WaveError> {
    let mut acc: BTreeMap<usize, u64> = BTreeMap::new();
    for (item, qty) in entries {
        if *qty < 0 {
            return Err(WaveError::malformed(format!(
                "negative {what} {qty} for item {item} in {owner}"
            )));
        }
        let idx = *index.entry(item.clone()).or_insert_with(|| {
            items.push(item.clone());
            items.len() - 1
        });
        let slot = acc.entry(idx).or_insert(0);
        *slot = slot.checked_add(*qty as u64).ok_or_else(|| {
            WaveError::malformed(format!("{what} of item {item} in {owner} overflows u64"))
        })?;
    }
    Ok(acc.into_iter().filter(|&(_, q)| q > 0).collect())
}

fn checked_total(compiled: &[(usize, u64)], owner: &str, what: &str) -> Result<u64, WaveError> {
    compiled
        .iter()
        .try_fold(0u64, |acc, &(_, q)| acc.checked_add(q))
        .ok_or_else(|| WaveError::malformed(format!("total {what} of {owner} overflows u64")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Instance {
        Instance::new(
            vec![
                Order::new("o0").with_demand("A", 3),
                Order::new("o1").with_demand("A", 2).with_demand("B", 1),
            ],
            vec![
                Aisle::new("c0").with_capacity("A", 4),
                Aisle::new("c1").with_capacity("B", 5).with_capacity("A", 5),
            ],
            Bounds::new(2, 5).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let inst = small();
        assert_eq!(inst.order_count(), 2);
        assert_eq!(inst.aisle_count(), 2);
        assert_eq!(inst.variable_count(), 4);
        assert_eq!(inst.items(), &[ItemId::from("A"), ItemId::from("B")]);
        assert_eq!(inst.order_units(0), 3);
        assert_eq!(inst.order_units(1), 3);
        assert_eq!(inst.max_total_units(), 6);
        assert_eq!(inst.bounds(), Bounds { lb: 2, ub: 5 });
    }

    #[test]
    fn test_compiled_form() {
        let inst = small();
        assert_eq!(inst.order_demand(1), &[(0, 2), (1, 1)]);
        assert_eq!(inst.aisle_supply(1), &[(0, 5), (1, 5)]);
    }

    #[test]
    fn test_repeated_items_summed_and_zero_dropped() {
        let inst = Instance::new(
            vec![Order::new("o0")
                .with_demand("A", 1)
                .with_demand("A", 2)
                .with_demand("B", 0)],
            vec![Aisle::new("c0").with_capacity("A", 0)],
            Bounds::new(0, 10).unwrap(),
        )
        .unwrap();
        assert_eq!(inst.order_demand(0), &[(0, 3)]);
        assert!(inst.aisle_supply(0).is_empty());
        assert_eq!(inst.item_count(), 2);
    }

    #[test]
    fn test_negative_demand_rejected() {
        let err = Instance::new(
            vec![Order::new("o0").with_demand("A", -1)],
            vec![],
            Bounds::new(0, 1).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, WaveError::MalformedInstance(_)));
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let err = Instance::new(
            vec![],
            vec![Aisle::new("c0").with_capacity("A", -4)],
            Bounds::new(0, 1).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, WaveError::MalformedInstance(_)));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = Instance::new(vec![], vec![], Bounds { lb: 5, ub: 2 }).unwrap_err();
        assert!(matches!(err, WaveError::MalformedInstance(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Instance::new(
            vec![Order::new("o0"), Order::new("o0")],
            vec![],
            Bounds::new(0, 1).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, WaveError::malformed("duplicate order id: o0"));
    }

    #[test]
    fn test_overflowing_order_total_rejected() {
        let err = Instance::new(
            vec![Order::new("o0")
                .with_demand("A", i64::MAX)
                .with_demand("B", i64::MAX)
                .with_demand("C", i64::MAX)],
            vec![Aisle::new("c0").with_capacity("A", 1)],
            Bounds::new(0, 1).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, WaveError::malformed("total demand of o0 overflows u64"));
    }

    #[test]
    fn test_overflowing_totals_across_orders_and_aisles_rejected() {
        let orders: Vec<Order> = (0..3)
            .map(|i| Order::new(format!("o{i}")).with_demand("A", i64::MAX))
            .collect();
        let err = Instance::new(orders, vec![], Bounds::new(0, 1).unwrap()).unwrap_err();
        assert!(matches!(err, WaveError::MalformedInstance(_)));

        let aisles: Vec<Aisle> = (0..3)
            .map(|j| Aisle::new(format!("c{j}")).with_capacity("A", i64::MAX))
            .collect();
        let err = Instance::new(vec![], aisles, Bounds::new(0, 1).unwrap()).unwrap_err();
        assert!(matches!(err, WaveError::MalformedInstance(_)));

        let err = Instance::new(
            vec![Order::new("o0")
                .with_demand("A", i64::MAX)
                .with_demand("A", i64::MAX)
                .with_demand("A", i64::MAX)],
            vec![],
            Bounds::new(0, 1).unwrap(),
        )
        .unwrap_err();
        assert_eq!(err, WaveError::malformed("demand of item A in o0 overflows u64"));
    }

    #[test]
    fn test_largest_representable_totals_accepted() {
        let inst = Instance::new(
            vec![
                Order::new("o0").with_demand("A", i64::MAX),
                Order::new("o1").with_demand("A", i64::MAX),
            ],
            vec![Aisle::new("c0").with_capacity("A", i64::MAX)],
            Bounds::new(0, i64::MAX).unwrap(),
        )
        .unwrap();
        assert_eq!(inst.max_total_units(), u64::MAX - 1);
    }

    #[test]
    fn test_with_bounds() {
        let inst = small();
        let tighter = inst.with_bounds(Bounds::new(3, 4).unwrap()).unwrap();
        assert_eq!(tighter.bounds(), Bounds { lb: 3, ub: 4 });
        assert_eq!(inst.bounds(), Bounds { lb: 2, ub: 5 });
        assert!(inst.with_bounds(Bounds { lb: 9, ub: 1 }).is_err());
    }
}
