//! Bottom-up tabulated strategy.

use super::types::{reconstruct_cuts, RodCutResult};

/// Solves rod cutting bottom-up over every sub-length `1..=length`.
///
/// Produces exactly the same result as [`memoized`](super::memoized) for
/// the same inputs. Does not validate its inputs.
///
/// # Panics
///
/// If the `length + 1` entry tables cannot be allocated. Use
/// [`RodCutter::solve`](super::RodCutter::solve) for a bounded, checked call.
///
/// # Examples
///
/// ```
/// use u_cutqueue::rod::tabulated;
///
/// let result = tabulated(5, &[2.0, 5.0, 7.0, 8.0, 10.0]);
/// assert_eq!(result.max_profit, 12.0);
/// assert_eq!(result.cuts, vec![2, 2, 1]);
/// ```
pub fn tabulated(length: usize, prices: &[f64]) -> RodCutResult {
    let mut profit = vec![0.0_f64; length + 1];
    let mut first_cut: Vec<Option<usize>> = vec![None; length + 1];

    for n in 1..=length {
        for i in 1..=n.min(prices.len()) {
            let candidate = profit[n - i] + prices[i - 1];
            if profit[n] < candidate {
                profit[n] = candidate;
                first_cut[n] = Some(i);
            }
        }
    }

    let cuts = reconstruct_cuts(length, |n| first_cut[n]);
    RodCutResult::new(profit[length], cuts)
}
