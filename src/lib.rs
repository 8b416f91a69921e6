//! Small combinatorial optimization kernels.
//!
//! Two independent, stateless routines over in-memory inputs:
//!
//! - **Rod cutting** ([`rod`]): maximizes the profit of cutting a rod
//!   into priced pieces by dynamic programming. Offered as a top-down
//!   memoized strategy and a bottom-up tabulated strategy that agree
//!   exactly on every input.
//! - **Print queue batching** ([`queue`]): orders print jobs by priority
//!   and packs them greedily into capacity-bounded batches, reporting
//!   the print order and total elapsed time.
//!
//! # Architecture
//!
//! Neither module depends on the other. Every call is self-contained:
//! caches and working buffers live for one invocation only, so all
//! entry points are safe to call concurrently.

pub mod error;
pub mod queue;
pub mod rod;

pub use error::{Error, Result};
