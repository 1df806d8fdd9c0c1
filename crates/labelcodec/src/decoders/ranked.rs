//! # Ranked Candidates
//!
//! Per-position, confidence-ranked alternatives for a sequence of
//! probability vectors; input for downstream lattice re-ranking or
//! language-model rescoring.

use crate::{alphabet::SymbolMode, types::CodeType};

/// The default number of candidates kept per position.
pub const DEFAULT_TOP_N: usize = 10;

/// Rank the classes of one probability vector.
///
/// The vector is stably sorted ascending, and the top `n` entries are
/// returned highest first; equal probabilities rank the higher class first.
///
/// ## Returns
/// Up to `n` `(class, probability)` pairs.
pub fn rank_classes(
    probs: &[f32],
    n: usize,
) -> Vec<(usize, f32)> {
    let mut order: Vec<usize> = (0..probs.len()).collect();
    order.sort_by(|&a, &b| probs[a].total_cmp(&probs[b]));
    order
        .into_iter()
        .rev()
        .take(n)
        .map(|idx| (idx, probs[idx]))
        .collect()
}

/// Ranked candidates for one sequence.
///
/// Every table is `(ranks, sequence_length)`: row 0 holds the rank-1
/// (most confident) candidate of every position.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidates<T: CodeType> {
    mode: SymbolMode,
    codes: Vec<Vec<T>>,
    symbols: Vec<Vec<String>>,
    probabilities: Vec<Vec<f32>>,
}

impl<T: CodeType> RankedCandidates<T> {
    /// Create an empty table of `ranks` rows.
    pub fn new(
        mode: SymbolMode,
        ranks: usize,
    ) -> Self {
        Self {
            mode,
            codes: vec![Vec::new(); ranks],
            symbols: vec![Vec::new(); ranks],
            probabilities: vec![Vec::new(); ranks],
        }
    }

    /// Append one position; `column` is highest rank first.
    ///
    /// Columns shorter than [`ranks`](Self::ranks) leave the lower ranks short.
    pub fn push_position<I, S>(
        &mut self,
        column: I,
    ) where
        I: IntoIterator<Item = (T, S, f32)>,
        S: Into<String>,
    {
        for (rank, (code, symbol, prob)) in column.into_iter().enumerate().take(self.ranks()) {
            self.codes[rank].push(code);
            self.symbols[rank].push(symbol.into());
            self.probabilities[rank].push(prob);
        }
    }

    /// The number of ranks.
    pub fn ranks(&self) -> usize {
        self.symbols.len()
    }

    /// The sequence length.
    pub fn len(&self) -> usize {
        self.symbols.first().map(Vec::len).unwrap_or(0)
    }

    /// Is the sequence empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `(ranks, sequence_length)` symbol table.
    pub fn symbols(&self) -> &[Vec<String>] {
        &self.symbols
    }

    /// The `(ranks, sequence_length)` probability table.
    pub fn probabilities(&self) -> &[Vec<f32>] {
        &self.probabilities
    }

    /// The `(ranks, sequence_length)` code table.
    pub fn codes(&self) -> &[Vec<T>] {
        &self.codes
    }

    /// The rank-1 symbols joined per the alphabet's mode.
    pub fn best_path(&self) -> String {
        match self.symbols.first() {
            Some(row) => self.mode.join(row),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_classes() {
        let ranked = rank_classes(&[0.1, 0.5, 0.3, 0.9], 3);
        assert_eq!(ranked, vec![(3, 0.9), (1, 0.5), (2, 0.3)]);

        // n larger than the vector.
        assert_eq!(rank_classes(&[0.2, 0.8], 10), vec![(1, 0.8), (0, 0.2)]);

        assert!(rank_classes(&[0.2, 0.8], 0).is_empty());
    }

    #[test]
    fn test_rank_ties() {
        assert_eq!(
            rank_classes(&[0.5, 0.5, 0.1], 2),
            vec![(1, 0.5), (0, 0.5)]
        );
    }

    #[test]
    fn test_candidates() {
        let mut ranked: RankedCandidates<u32> = RankedCandidates::new(SymbolMode::Dictionary, 2);
        assert!(ranked.is_empty());

        ranked.push_position([(1, "the", 0.7), (2, "a", 0.2), (3, "an", 0.1)]);
        ranked.push_position([(4, "cat", 0.6), (5, "bat", 0.3)]);

        assert_eq!(ranked.ranks(), 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked.codes(), &[vec![1, 4], vec![2, 5]]);
        assert_eq!(ranked.probabilities()[1], vec![0.2, 0.3]);
        assert_eq!(ranked.best_path(), "the cat");
    }
}
