//! Priority-ordered print queue batching.
//!
//! Jobs are ordered by a [`JobOrdering`] (ascending priority by default,
//! ties keeping input order) and then packed greedily: each pass scans
//! the jobs still waiting and adds every job that keeps the batch within
//! the printer's item and volume limits. Skipped jobs stay in line for
//! the next pass. Batches print one after another; jobs inside a batch
//! print in parallel, so a batch takes as long as its slowest job.
//!
//! This is greedy first-fit in priority order, not optimal bin packing.
//! A pass that places nothing fails with
//! [`Error::UnplaceableJob`](crate::Error::UnplaceableJob) instead of
//! looping.

mod config;
mod optimizer;
mod ordering;
mod types;

pub use config::OptimizerConfig;
pub use optimizer::PrintQueueOptimizer;
pub use ordering::{ByPriority, JobOrdering, LargestVolume, OrderingRule, ShortestPrintTime};
pub use types::{Batch, PrintJob, PrintPlan, PrinterConstraints};
