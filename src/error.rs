//! Error types.

/// Errors returned by instance construction and the wave search.
///
/// An empty result is not an error: a search without any feasible wave
/// yields [`BestWave::NoFeasibleSolution`](crate::rank::BestWave).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaveError {
    /// Input data violates the instance invariants (negative quantity,
    /// negative bound, LB > UB, duplicate identifier).
    #[error("malformed instance: {0}")]
    MalformedInstance(String),

    /// An assignment does not cover exactly the instance's orders and aisles.
    #[error("incomplete assignment: expected {expected_orders} orders and {expected_aisles} aisles, got {orders} and {aisles}")]
    IncompleteAssignment {
        expected_orders: usize,
        expected_aisles: usize,
        orders: usize,
        aisles: usize,
    },

    /// The number of binary variables exceeds the configured ceiling.
    #[error("search space too large: {variables} variables exceed the limit of {limit}")]
    SearchSpaceTooLarge { variables: usize, limit: usize },
}

impl WaveError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInstance(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = WaveError::SearchSpaceTooLarge {
            variables: 40,
            limit: 30,
        };
        assert_eq!(
            err.to_string(),
            "search space too large: 40 variables exceed the limit of 30"
        );

        let err = WaveError::malformed("LB 5 > UB 3");
        assert_eq!(err.to_string(), "malformed instance: LB 5 > UB 3");
    }
}
