//! Greedy batch formation.

use std::collections::HashSet;

use log::{debug, warn};

use super::config::OptimizerConfig;
use super::types::{Batch, PrintJob, PrintPlan, PrinterConstraints};
use crate::error::{Error, Result};

/// Plans print batches for a queue of jobs.
///
/// # Examples
///
/// ```
/// use u_cutqueue::queue::{PrintJob, PrintQueueOptimizer, PrinterConstraints};
///
/// let jobs = vec![
///     PrintJob::new("M1", 100.0, 1, 120.0),
///     PrintJob::new("M2", 150.0, 1, 90.0),
///     PrintJob::new("M3", 120.0, 1, 150.0),
/// ];
/// let plan = PrintQueueOptimizer::default()
///     .optimize(&jobs, &PrinterConstraints::new(300.0, 2))
///     .unwrap();
///
/// assert_eq!(plan.print_order, vec!["M1", "M2", "M3"]);
/// assert_eq!(plan.total_time, 270.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrintQueueOptimizer {
    config: OptimizerConfig,
}

impl PrintQueueOptimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Orders `jobs` and packs them into batches under `constraints`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if the configuration is invalid.
    /// - [`Error::InvalidInput`] for a non-finite or negative
    ///   `max_volume`, or (with job validation on) a non-finite or
    ///   non-positive job volume or print time.
    /// - [`Error::DuplicateJobId`] if two jobs share an id (with job
    ///   validation on).
    /// - [`Error::UnplaceableJob`] if some jobs can never join a batch,
    ///   e.g. a volume above `max_volume` or `max_items == 0`.
    pub fn optimize(
        &self,
        jobs: &[PrintJob],
        constraints: &PrinterConstraints,
    ) -> Result<PrintPlan> {
        self.config.validate()?;
        constraints.validate()?;
        if self.config.validate_jobs {
            validate_jobs(jobs)?;
        }

        debug!(
            "print queue: {} jobs, max_volume={}, max_items={}",
            jobs.len(),
            constraints.max_volume,
            constraints.max_items
        );

        let mut pending = self.config.ordering.sort(jobs);
        let mut plan = PrintPlan::default();

        while !pending.is_empty() {
            let (batch, rest) = form_batch(pending, constraints);
            if batch.is_empty() {
                let job_ids: Vec<String> = rest.iter().map(|j| j.id.clone()).collect();
                warn!(
                    "print queue: {} job(s) fit no batch: {}",
                    job_ids.len(),
                    job_ids.join(", ")
                );
                return Err(Error::UnplaceableJob { job_ids });
            }

            let batch = Batch::from_jobs(&batch);
            debug!(
                "print queue: batch {} = [{}], volume={}, time={}",
                plan.batch_count() + 1,
                batch.job_ids.join(", "),
                batch.volume,
                batch.print_time
            );
            plan.push_batch(batch);
            pending = rest;
        }

        debug!(
            "print queue: {} batches, total_time={}",
            plan.batch_count(),
            plan.total_time
        );
        Ok(plan)
    }
}

/// Splits `pending` into the next batch and the jobs left for later.
///
/// Jobs are offered in order; a job that does not fit is skipped without
/// revisiting earlier decisions.
fn form_batch<'a>(
    pending: Vec<&'a PrintJob>,
    constraints: &PrinterConstraints,
) -> (Vec<&'a PrintJob>, Vec<&'a PrintJob>) {
    let mut batch = Vec::with_capacity(constraints.max_items.min(pending.len()));
    let mut rest = Vec::with_capacity(pending.len());
    let mut volume = 0.0;

    for job in pending {
        if constraints.admits(batch.len(), volume, job) {
            volume += job.volume;
            batch.push(job);
        } else {
            rest.push(job);
        }
    }

    (batch, rest)
}

fn validate_jobs(jobs: &[PrintJob]) -> Result<()> {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in jobs {
        job.validate()?;
        if !seen.insert(job.id.as_str()) {
            return Err(Error::DuplicateJobId { id: job.id.clone() });
        }
    }
    Ok(())
}
