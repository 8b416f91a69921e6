//! Print queue data types.

use crate::error::{Error, Result};

/// A single job waiting to be printed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintJob {
    /// Unique job identifier.
    pub id: String,

    /// Material volume the job occupies in a batch.
    pub volume: f64,

    /// Lower values print earlier.
    pub priority: i64,

    /// Time the job takes on the printer.
    pub print_time: f64,
}

impl PrintJob {
    pub fn new(id: impl Into<String>, volume: f64, priority: i64, print_time: f64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            print_time,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.volume.is_finite() || self.volume <= 0.0 {
            return Err(Error::invalid_input(format!(
                "job {}: volume must be finite and positive, got {}",
                self.id, self.volume
            )));
        }
        if !self.print_time.is_finite() || self.print_time <= 0.0 {
            return Err(Error::invalid_input(format!(
                "job {}: print_time must be finite and positive, got {}",
                self.id, self.print_time
            )));
        }
        Ok(())
    }
}

/// Per-batch limits of the printer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrinterConstraints {
    /// Maximum total volume of one batch.
    pub max_volume: f64,

    /// Maximum number of jobs in one batch.
    pub max_items: usize,
}

impl PrinterConstraints {
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Checks that `max_volume` is a finite, non-negative number.
    ///
    /// `max_items == 0` is not rejected here; it surfaces as
    /// [`Error::UnplaceableJob`] once batching finds nothing to place.
    pub fn validate(&self) -> Result<()> {
        if !self.max_volume.is_finite() || self.max_volume < 0.0 {
            return Err(Error::invalid_input(format!(
                "max_volume must be finite and non-negative, got {}",
                self.max_volume
            )));
        }
        Ok(())
    }

    /// Returns whether `job` fits a batch that already holds `items` jobs
    /// totalling `volume`.
    pub(crate) fn admits(&self, items: usize, volume: f64, job: &PrintJob) -> bool {
        items < self.max_items && volume + job.volume <= self.max_volume
    }
}

/// Jobs printed together in one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Batch {
    /// Job ids in the order they were added.
    pub job_ids: Vec<String>,

    /// Total volume of the batch.
    pub volume: f64,

    /// Longest print time in the batch.
    pub print_time: f64,
}

impl Batch {
    pub(crate) fn from_jobs(jobs: &[&PrintJob]) -> Self {
        Self {
            job_ids: jobs.iter().map(|j| j.id.clone()).collect(),
            volume: jobs.iter().map(|j| j.volume).sum(),
            print_time: jobs
                .iter()
                .map(|j| j.print_time)
                .fold(f64::NEG_INFINITY, f64::max),
        }
    }

    /// Returns the number of jobs in the batch.
    pub fn len(&self) -> usize {
        self.job_ids.len()
    }

    /// Returns whether the batch holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }
}

/// Result of optimizing a print queue.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintPlan {
    /// All job ids in print order. Consecutive runs form the batches.
    pub print_order: Vec<String>,

    /// Sum of each batch's longest print time.
    pub total_time: f64,

    /// The batches in print order.
    pub batches: Vec<Batch>,
}

impl PrintPlan {
    pub(crate) fn push_batch(&mut self, batch: Batch) {
        self.print_order.extend(batch.job_ids.iter().cloned());
        self.total_time += batch.print_time;
        self.batches.push(batch);
    }

    /// Returns the number of batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }
}
