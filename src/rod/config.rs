//! Rod-cutting configuration.

/// Evaluation strategy for the rod-cutting recurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Top-down recursion with a per-call cache. Recursion depth equals
    /// the rod length.
    Memoized,

    /// Bottom-up iteration over all sub-lengths. No recursion.
    #[default]
    Tabulated,
}

/// Configuration for [`RodCutter`](super::RodCutter).
///
/// # Examples
///
/// ```
/// use u_cutqueue::rod::{RodCutConfig, Strategy};
///
/// let config = RodCutConfig::default()
///     .with_strategy(Strategy::Memoized)
///     .with_validate_prices(false);
/// assert_eq!(config.strategy, Strategy::Memoized);
/// assert!(!config.validate_prices);
/// ```
#[derive(Debug, Clone)]
pub struct RodCutConfig {
    /// Which strategy evaluates the recurrence.
    pub strategy: Strategy,

    /// Reject non-finite or non-positive prices before solving.
    pub validate_prices: bool,

    /// Longest rod the checked entry points accept.
    ///
    /// Both strategies hold one table entry per sub-length, so this
    /// caps their memory use.
    pub max_length: usize,

    /// Solve independent lengths in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature enabled.
    pub parallel: bool,
}

impl Default for RodCutConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            validate_prices: true,
            max_length: Self::DEFAULT_MAX_LENGTH,
            parallel: false,
        }
    }
}

impl RodCutConfig {
    /// Default for [`max_length`](Self::max_length).
    pub const DEFAULT_MAX_LENGTH: usize = 10_000_000;

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_validate_prices(mut self, validate: bool) -> Self {
        self.validate_prices = validate;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
