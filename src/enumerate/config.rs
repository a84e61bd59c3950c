//! Enumeration configuration.

/// Largest variable count the enumerator accepts regardless of
/// configuration; candidate indices are `u64`.
pub const HARD_VARIABLE_LIMIT: usize = 63;

/// Configuration for the exhaustive wave search.
///
/// # Examples
///
/// ```
/// use u_wavepick::enumerate::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_max_variables(20)
///     .with_prune(false);
/// assert_eq!(config.max_variables, 20);
/// assert!(!config.prune);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of binary variables (orders + aisles).
    ///
    /// The search visits `2^n` candidates, so instances beyond this size
    /// are rejected with [`WaveError::SearchSpaceTooLarge`](crate::WaveError)
    /// instead of running for an intractable time. Values above
    /// [`HARD_VARIABLE_LIMIT`] are clamped.
    pub max_variables: usize,

    /// Skip whole blocks of candidates whose order selection already
    /// violates the unit bounds.
    ///
    /// Pruning never changes the solution set; it only reduces the number
    /// of evaluated candidates.
    pub prune: bool,

    /// Split the candidate space across rayon workers.
    ///
    /// Only takes effect with the `parallel` cargo feature; the result is
    /// identical to a sequential run.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_variables: 30,
            prune: true,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Sets the variable-count ceiling.
    pub fn with_max_variables(mut self, n: usize) -> Self {
        self.max_variables = n;
        self
    }

    /// Enables or disables block pruning.
    pub fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Enables or disables parallel enumeration.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The ceiling actually enforced.
    pub fn variable_limit(&self) -> usize {
        self.max_variables.min(HARD_VARIABLE_LIMIT)
    }
}
