//! Print queue optimizer configuration.

use super::ordering::{JobOrdering, OrderingRule};
use crate::error::{Error, Result};

/// Configuration for [`PrintQueueOptimizer`](super::PrintQueueOptimizer).
///
/// # Examples
///
/// ```
/// use u_cutqueue::queue::{OptimizerConfig, ShortestPrintTime};
///
/// let config = OptimizerConfig::default()
///     .with_tie_breaker(ShortestPrintTime)
///     .with_validate_jobs(true);
/// assert_eq!(config.ordering.rule_names(), vec!["Priority", "ShortestPrintTime"]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Order in which jobs are offered to each batch.
    pub ordering: JobOrdering,

    /// Reject duplicate ids and non-finite or non-positive job fields
    /// before batching.
    pub validate_jobs: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            ordering: JobOrdering::by_priority(),
            validate_jobs: true,
        }
    }
}

impl OptimizerConfig {
    pub fn with_ordering(mut self, ordering: JobOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Appends a rule consulted when all earlier rules tie.
    pub fn with_tie_breaker<R: OrderingRule + 'static>(mut self, rule: R) -> Self {
        self.ordering = self.ordering.with_rule(rule);
        self
    }

    pub fn with_validate_jobs(mut self, validate: bool) -> Self {
        self.validate_jobs = validate;
        self
    }

    /// Validates the configuration.
    ///
    /// Only the ordering epsilon can be out of range. It affects float
    /// tie-breaker rules such as [`ShortestPrintTime`](super::ShortestPrintTime);
    /// priority is compared exactly and never uses it.
    pub fn validate(&self) -> Result<()> {
        let eps = self.ordering.epsilon();
        if !eps.is_finite() || eps < 0.0 {
            return Err(Error::InvalidConfig {
                reason: "ordering epsilon must be finite and non-negative",
            });
        }
        Ok(())
    }
}
