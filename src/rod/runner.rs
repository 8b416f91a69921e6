//! Checked rod-cutting entry point.

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::{RodCutConfig, Strategy};
use super::memo::memoized;
use super::table::tabulated;
use super::types::RodCutResult;
use crate::error::{Error, Result};

/// Solves rod-cutting instances with a configured strategy.
///
/// # Examples
///
/// ```
/// use u_cutqueue::rod::{RodCutConfig, RodCutter, Strategy};
///
/// let cutter = RodCutter::new(RodCutConfig::default().with_strategy(Strategy::Memoized));
/// let result = cutter.solve(5, &[2.0, 5.0, 7.0, 8.0, 10.0]).unwrap();
/// assert_eq!(result.max_profit, 12.0);
/// assert_eq!(result.number_of_cuts, 2);
///
/// assert!(cutter.solve(-1, &[1.0]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RodCutter {
    config: RodCutConfig,
}

impl RodCutter {
    /// Creates a cutter with the given configuration.
    pub fn new(config: RodCutConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &RodCutConfig {
        &self.config
    }

    /// Computes the maximum profit for a rod of `length`.
    ///
    /// Lengths longer than the price table are allowed; pieces longer than
    /// `prices.len()` are simply unavailable. An empty price table yields
    /// zero profit and no cuts.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `length` is negative or above
    /// [`RodCutConfig::max_length`], or if price validation is enabled and
    /// a price is non-finite or not positive.
    pub fn solve(&self, length: i64, prices: &[f64]) -> Result<RodCutResult> {
        let length = checked_length(length)?;
        self.check_length(length)?;
        self.check_prices(prices)?;
        Ok(self.run(length, prices))
    }

    /// Solves every length in `lengths` against the same price table.
    ///
    /// Results are returned in input order. With the `parallel` feature
    /// and [`RodCutConfig::parallel`] set, lengths are solved concurrently.
    pub fn solve_lengths(&self, lengths: &[usize], prices: &[f64]) -> Result<Vec<RodCutResult>> {
        self.check_prices(prices)?;
        for &length in lengths {
            self.check_length(length)?;
        }

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                return Ok(lengths
                    .par_iter()
                    .map(|&length| self.run(length, prices))
                    .collect());
            }
        }

        Ok(lengths
            .iter()
            .map(|&length| self.run(length, prices))
            .collect())
    }

    fn run(&self, length: usize, prices: &[f64]) -> RodCutResult {
        debug!(
            "rod cut: strategy={:?} length={} prices={}",
            self.config.strategy,
            length,
            prices.len()
        );
        let result = match self.config.strategy {
            Strategy::Memoized => memoized(length, prices),
            Strategy::Tabulated => tabulated(length, prices),
        };
        debug!(
            "rod cut: length={} max_profit={} pieces={}",
            length,
            result.max_profit,
            result.pieces()
        );
        result
    }

    fn check_length(&self, length: usize) -> Result<()> {
        if length > self.config.max_length {
            return Err(Error::invalid_input(format!(
                "rod length {length} exceeds the configured maximum of {}",
                self.config.max_length
            )));
        }
        Ok(())
    }

    fn check_prices(&self, prices: &[f64]) -> Result<()> {
        if !self.config.validate_prices {
            return Ok(());
        }
        match prices
            .iter()
            .enumerate()
            .find(|&(_, &p)| !p.is_finite() || p <= 0.0)
        {
            Some((idx, &price)) => Err(Error::invalid_input(format!(
                "price for length {} must be finite and positive, got {price}",
                idx + 1
            ))),
            None => Ok(()),
        }
    }
}

fn checked_length(length: i64) -> Result<usize> {
    if length < 0 {
        return Err(Error::invalid_input(format!(
            "rod length must be non-negative, got {length}"
        )));
    }
    usize::try_from(length).map_err(|_| {
        Error::invalid_input(format!("rod length {length} exceeds the addressable range"))
    })
}
