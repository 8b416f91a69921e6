//! Error type shared by the rod-cutting and print-queue kernels.

use thiserror::Error;

/// Errors returned by the validated entry points of this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("duplicate job id: {id}")]
    DuplicateJobId { id: String },

    /// A batching pass placed no job at all.
    ///
    /// Carries the ids that were still waiting when the pass came up
    /// empty, i.e. every job that can never fit a batch under the
    /// given constraints.
    #[error("jobs cannot be placed in any batch: {}", .job_ids.join(", "))]
    UnplaceableJob { job_ids: Vec<String> },
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
