//! Raw input types: items, orders, aisles and unit bounds.

use std::fmt;

use crate::error::WaveError;

/// Identifier of a stock-keeping unit.
///
/// Items have no lifecycle of their own; they only key demands and
/// capacities. Integers convert into their decimal string form, so
/// `ItemId::from(3)` and `ItemId::from("3")` name the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(String);

impl ItemId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<usize> for ItemId {
    fn from(n: usize) -> Self {
        Self(n.to_string())
    }
}

impl From<i32> for ItemId {
    fn from(n: i32) -> Self {
        Self(n.to_string())
    }
}

/// A customer order: the quantity of each item it requires.
///
/// # Examples
///
/// ```
/// use u_wavepick::instance::Order;
///
/// let order = Order::new("o0").with_demand("A", 3).with_demand("C", 1);
/// assert_eq!(order.demands.len(), 2);
/// assert_eq!(order.total_units(), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Order identifier (unique within an instance).
    pub id: String,
    /// (item, quantity) pairs. Repeated items are summed.
    pub demands: Vec<(ItemId, i64)>,
}

impl Order {
    /// Creates an order with no demands.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            demands: Vec::new(),
        }
    }

    /// Adds a demand for `quantity` units of `item`.
    pub fn with_demand(mut self, item: impl Into<ItemId>, quantity: i64) -> Self {
        self.demands.push((item.into(), quantity));
        self
    }

    /// Sum of all demanded quantities, or `None` if it overflows `i64`.
    pub fn total_units(&self) -> Option<i64> {
        self.demands
            .iter()
            .try_fold(0i64, |acc, &(_, q)| acc.checked_add(q))
    }
}

/// A warehouse aisle: the units of each item available in it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aisle {
    /// Aisle identifier (unique within an instance).
    pub id: String,
    /// (item, capacity) pairs. Repeated items are summed.
    pub capacities: Vec<(ItemId, i64)>,
}

impl Aisle {
    /// Creates an aisle that stocks nothing.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            capacities: Vec::new(),
        }
    }

    /// Adds `capacity` units of `item`.
    pub fn with_capacity(mut self, item: impl Into<ItemId>, capacity: i64) -> Self {
        self.capacities.push((item.into(), capacity));
        self
    }
}

/// Permissible range `[lb, ub]` for the total units of a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Lower bound (LB).
    pub lb: i64,
    /// Upper bound (UB).
    pub ub: i64,
}

impl Bounds {
    /// Creates validated bounds.
    ///
    /// # Errors
    ///
    /// [`WaveError::MalformedInstance`] if a bound is negative or `lb > ub`.
    pub fn new(lb: i64, ub: i64) -> Result<Self, WaveError> {
        let bounds = Self { lb, ub };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks non-negativity and ordering.
    pub fn validate(&self) -> Result<(), WaveError> {
        if self.lb < 0 || self.ub < 0 {
            return Err(WaveError::malformed(format!(
                "bounds must be non-negative: LB {} UB {}",
                self.lb, self.ub
            )));
        }
        if self.lb > self.ub {
            return Err(WaveError::malformed(format!(
                "LB {} > UB {}",
                self.lb, self.ub
            )));
        }
        Ok(())
    }

    /// Lower bound as an unsigned unit count.
    pub fn lower(&self) -> u64 {
        self.lb.max(0) as u64
    }

    /// Upper bound as an unsigned unit count.
    pub fn upper(&self) -> u64 {
        self.ub.max(0) as u64
    }

    /// Whether `units` lies in `[lb, ub]`.
    pub fn contains(&self, units: u64) -> bool {
        self.lower() <= units && units <= self.upper()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lb, self.ub)
    }
}
