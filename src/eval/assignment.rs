//! Binary assignments over order and aisle variables.

/// A decision variable of the wave model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    /// Selection of the order at this position.
    Order(usize),
    /// Selection of the aisle at this position.
    Aisle(usize),
}

/// A complete 0/1 assignment of every order and every aisle.
///
/// Variables are laid out orders first, then aisles, each in declared
/// order. The enumeration index of an assignment reads these variables as
/// a binary number with variable 0 as the most significant bit.
///
/// # Examples
///
/// ```
/// use u_wavepick::eval::{Assignment, Variable};
///
/// // 2 orders + 2 aisles; index 0b1001 selects o0 and c1.
/// let a = Assignment::from_index(0b1001, 2, 2);
/// assert_eq!(a.value(Variable::Order(0)), Some(1));
/// assert_eq!(a.value(Variable::Aisle(0)), Some(0));
/// assert_eq!(a.value(Variable::Aisle(1)), Some(1));
/// assert_eq!(a.index(), Some(0b1001));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    orders: Vec<bool>,
    aisles: Vec<bool>,
}

impl Assignment {
    /// Creates an assignment from explicit selections.
    pub fn new(orders: Vec<bool>, aisles: Vec<bool>) -> Self {
        Self { orders, aisles }
    }

    /// Creates the all-zero assignment.
    pub fn empty(order_count: usize, aisle_count: usize) -> Self {
        Self {
            orders: vec![false; order_count],
            aisles: vec![false; aisle_count],
        }
    }

    /// Decodes enumeration index `index`.
    ///
    /// Bits above `order_count + aisle_count` are ignored.
    pub fn from_index(index: u64, order_count: usize, aisle_count: usize) -> Self {
        let width = order_count + aisle_count;
        let bit = |k: usize| -> bool {
            let shift = width - 1 - k;
            shift < 64 && (index >> shift) & 1 == 1
        };
        Self {
            orders: (0..order_count).map(bit).collect(),
            aisles: (order_count..width).map(bit).collect(),
        }
    }

    /// Encodes this assignment as its enumeration index.
    ///
    /// Returns `None` if there are more than 64 variables.
    pub fn index(&self) -> Option<u64> {
        if self.variable_count() > 64 {
            return None;
        }
        Some(
            self.values()
                .fold(0u64, |acc, v| (acc << 1) | u64::from(v)),
        )
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn aisle_count(&self) -> usize {
        self.aisles.len()
    }

    pub fn variable_count(&self) -> usize {
        self.orders.len() + self.aisles.len()
    }

    /// Order selections in declared order.
    pub fn orders(&self) -> &[bool] {
        &self.orders
    }

    /// Aisle selections in declared order.
    pub fn aisles(&self) -> &[bool] {
        &self.aisles
    }

    /// Value (0 or 1) of a variable, or `None` if it is not covered.
    pub fn value(&self, var: Variable) -> Option<u8> {
        let v = match var {
            Variable::Order(i) => self.orders.get(i),
            Variable::Aisle(j) => self.aisles.get(j),
        };
        v.map(|&b| u8::from(b))
    }

    /// Sets a variable. Out-of-range positions are ignored.
    pub fn set(&mut self, var: Variable, selected: bool) {
        let slot = match var {
            Variable::Order(i) => self.orders.get_mut(i),
            Variable::Aisle(j) => self.aisles.get_mut(j),
        };
        if let Some(s) = slot {
            *s = selected;
        }
    }

    /// All variable values, orders first.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.orders
            .iter()
            .chain(self.aisles.iter())
            .map(|&b| u8::from(b))
    }

    /// Positions of selected orders.
    pub fn selected_orders(&self) -> impl Iterator<Item = usize> + '_ {
        self.orders.iter().enumerate().filter(|&(_, &s)| s).map(|(i, _)| i)
    }

    /// Positions of selected aisles.
    pub fn selected_aisles(&self) -> impl Iterator<Item = usize> + '_ {
        self.aisles.iter().enumerate().filter(|&(_, &s)| s).map(|(j, _)| j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_msb_first() {
        let a = Assignment::from_index(0b10_01, 2, 2);
        assert_eq!(a.orders(), &[true, false]);
        assert_eq!(a.aisles(), &[false, true]);

        // Last declared variable changes fastest.
        let b = Assignment::from_index(1, 2, 2);
        assert_eq!(b.aisles(), &[false, true]);
        assert!(b.orders().iter().all(|&s| !s));
    }

    #[test]
    fn test_index_inverse() {
        for idx in 0..32u64 {
            let a = Assignment::from_index(idx, 3, 2);
            assert_eq!(a.index(), Some(idx));
        }
    }

    #[test]
    fn test_value_and_set() {
        let mut a = Assignment::empty(2, 1);
        assert_eq!(a.value(Variable::Order(1)), Some(0));
        assert_eq!(a.value(Variable::Aisle(3)), None);

        a.set(Variable::Order(1), true);
        a.set(Variable::Aisle(0), true);
        a.set(Variable::Aisle(9), true);
        assert_eq!(a.values().collect::<Vec<_>>(), vec![0, 1, 1]);
        assert_eq!(a.selected_orders().collect::<Vec<_>>(), vec![1]);
        assert_eq!(a.selected_aisles().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_empty_instance_assignment() {
        let a = Assignment::from_index(0, 0, 0);
        assert_eq!(a.variable_count(), 0);
        assert_eq!(a.index(), Some(0));
    }
}
