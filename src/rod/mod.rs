//! Rod cutting by dynamic programming.
//!
//! Given a rod of integer length `n` and a price table where `prices[i-1]`
//! is the price of a piece of length `i`, finds the cut that maximizes
//! total profit:
//!
//! ```text
//! P(0) = 0
//! P(n) = max_{1 <= i <= min(n, |prices|)} prices[i-1] + P(n-i)
//! ```
//!
//! Candidates are scanned from `i = 1` upward and only a strictly greater
//! profit replaces the incumbent, so ties keep the smaller first cut.
//! The cut list of `n` is the cut list of `n - i` followed by `i`.
//!
//! Two strategies evaluate the same recurrence and return identical
//! results for every input:
//!
//! - [`memoized`]: top-down recursion with a per-call cache.
//! - [`tabulated`]: bottom-up iteration over all sub-lengths.
//!
//! # References
//!
//! Cormen, Leiserson, Rivest & Stein (2009), "Introduction to Algorithms",
//! 3rd ed., §15.1 "Rod cutting"

mod config;
mod memo;
mod runner;
mod table;
mod types;

pub use config::{RodCutConfig, Strategy};
pub use memo::memoized;
pub use runner::RodCutter;
pub use table::tabulated;
pub use types::RodCutResult;
