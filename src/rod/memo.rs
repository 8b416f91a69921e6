//! Top-down memoized strategy.

use std::collections::HashMap;

use super::types::{reconstruct_cuts, RodCutResult};

/// Distance between cache checkpoints filled before the top-level call.
///
/// Bounds recursion depth to this many frames regardless of `length`.
const CHECKPOINT_STRIDE: usize = 1024;

/// Best value found for one sub-length.
#[derive(Debug, Clone, Copy)]
struct Subproblem {
    profit: f64,
    first_cut: Option<usize>,
}

/// Recursive evaluator holding the cache for a single top-level call.
struct Memo<'a> {
    prices: &'a [f64],
    cache: HashMap<usize, Subproblem>,
}

impl Memo<'_> {
    fn profit(&mut self, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        if let Some(hit) = self.cache.get(&n) {
            return hit.profit;
        }

        let mut best = Subproblem {
            profit: 0.0,
            first_cut: None,
        };
        for i in 1..=n.min(self.prices.len()) {
            let profit = self.profit(n - i) + self.prices[i - 1];
            if profit > best.profit {
                best = Subproblem {
                    profit,
                    first_cut: Some(i),
                };
            }
        }

        self.cache.insert(n, best);
        best.profit
    }

    fn first_cut(&self, n: usize) -> Option<usize> {
        self.cache.get(&n).and_then(|s| s.first_cut)
    }
}

/// Solves rod cutting top-down, caching each sub-length on first use.
///
/// Does not validate its inputs; see [`RodCutter::solve`] for the checked
/// entry point. Sub-lengths at every multiple of 1024 are evaluated in
/// ascending order before the top-level call, so recursion never goes
/// deeper than 1024 frames; the values and tie-breaks are unchanged.
///
/// [`RodCutter::solve`]: super::RodCutter::solve
///
/// # Examples
///
/// ```
/// use u_cutqueue::rod::memoized;
///
/// let result = memoized(3, &[1.0, 3.0, 8.0]);
/// assert_eq!(result.max_profit, 8.0);
/// assert_eq!(result.cuts, vec![3]);
/// assert_eq!(result.number_of_cuts, 0);
/// ```
pub fn memoized(length: usize, prices: &[f64]) -> RodCutResult {
    let mut memo = Memo {
        prices,
        cache: HashMap::new(),
    };
    for checkpoint in (CHECKPOINT_STRIDE..length).step_by(CHECKPOINT_STRIDE) {
        memo.profit(checkpoint);
    }
    let max_profit = memo.profit(length);
    let cuts = reconstruct_cuts(length, |n| memo.first_cut(n));
    RodCutResult::new(max_profit, cuts)
}
