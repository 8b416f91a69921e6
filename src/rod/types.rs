//! Rod-cutting result type.

/// Outcome of a rod-cutting solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RodCutResult {
    /// Maximum achievable profit.
    pub max_profit: f64,

    /// Piece lengths in the order the recurrence chose them.
    ///
    /// Empty when no priced piece fits (length 0 or an empty price table).
    pub cuts: Vec<usize>,

    /// Number of cut points: one fewer than the number of pieces,
    /// or 0 when `cuts` is empty.
    pub number_of_cuts: usize,
}

impl RodCutResult {
    pub(crate) fn new(max_profit: f64, cuts: Vec<usize>) -> Self {
        let number_of_cuts = cuts.len().saturating_sub(1);
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }

    /// Returns the number of pieces the rod is cut into.
    pub fn pieces(&self) -> usize {
        self.cuts.len()
    }

    /// Returns the total length covered by the pieces.
    pub fn total_length(&self) -> usize {
        self.cuts.iter().sum()
    }
}

/// Rebuilds the cut list from the first-cut choice stored per length.
///
/// Walking `n -> n - first_cut(n)` visits the choices newest-first, so the
/// collected list is reversed to match `cuts(n) = cuts(n - i) ++ [i]`.
/// A length without a choice ends the walk, exactly as an empty sub-list
/// would when concatenating.
pub(crate) fn reconstruct_cuts<F>(length: usize, first_cut: F) -> Vec<usize>
where
    F: Fn(usize) -> Option<usize>,
{
    let mut cuts = Vec::new();
    let mut remaining = length;
    while remaining > 0 {
        match first_cut(remaining) {
            Some(i) => {
                cuts.push(i);
                remaining -= i;
            }
            None => break,
        }
    }
    cuts.reverse();
    cuts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_of_cuts_counts_cut_points() {
        let result = RodCutResult::new(12.0, vec![2, 2, 1]);
        assert_eq!(result.number_of_cuts, 2);
        assert_eq!(result.pieces(), 3);
        assert_eq!(result.total_length(), 5);
    }

    #[test]
    fn test_empty_cuts() {
        let result = RodCutResult::new(0.0, vec![]);
        assert_eq!(result.number_of_cuts, 0);
        assert_eq!(result.pieces(), 0);
    }

    #[test]
    fn test_reconstruct_order() {
        // first_cut: 5 -> 1, 4 -> 2, 2 -> 2
        let choices = [None, Some(1), Some(2), Some(1), Some(2), Some(1)];
        let cuts = reconstruct_cuts(5, |n| choices[n]);
        assert_eq!(cuts, vec![2, 2, 1]);
    }

    #[test]
    fn test_reconstruct_stops_at_missing_choice() {
        // 3 has no choice: cuts(5) = cuts(3) ++ [2] = [2]
        let choices = [None, None, None, None, None, Some(2)];
        let cuts = reconstruct_cuts(5, |n| choices[n]);
        assert_eq!(cuts, vec![2]);
    }
}
