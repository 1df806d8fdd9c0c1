//! # Label Decoder Trait

use crate::{
    CodeBatch,
    LCResult,
    ProbabilityBatch,
    decoders::RankedCandidates,
    types::CodeType,
};

/// Trait for label decoders.
///
/// Decoding codes never fails; codes missing from the alphabet become its
/// default symbol. Ranking fails when the probabilities do not have one
/// class per alphabet slot.
pub trait LabelDecoder<T: CodeType>: Send + Sync {
    /// Decode codes into text.
    ///
    /// ## Arguments
    /// * `codes` - the codes to decode.
    fn decode(
        &self,
        codes: &[T],
    ) -> String;

    /// Decode a raw per-timestep sequence under the CTC collapse rule.
    ///
    /// ## Arguments
    /// * `codes` - the raw per-timestep codes.
    /// * `null` - the code removed everywhere; `None` selects the blank code.
    fn decode_ctc(
        &self,
        codes: &[T],
        null: Option<T>,
    ) -> String;

    /// Rank the candidates of one item of a probability batch.
    ///
    /// ## Arguments
    /// * `probs` - the probability batch.
    /// * `idx` - the item to rank.
    /// * `n` - the number of ranks to keep; capped at the class count.
    ///
    /// ## Returns
    /// A `LabelCodecError::Shape` error if `probs.classes()` is not the
    /// alphabet length.
    fn decode_top_n_item(
        &self,
        probs: &ProbabilityBatch,
        idx: usize,
        n: usize,
    ) -> LCResult<RankedCandidates<T>>;

    /// Decode every row of a batch, each cut to its length.
    fn decode_batch(
        &self,
        batch: &CodeBatch<T>,
    ) -> Vec<String> {
        batch.sequences().map(|codes| self.decode(codes)).collect()
    }

    /// CTC-decode every row of a batch, each cut to its length.
    fn decode_ctc_batch(
        &self,
        batch: &CodeBatch<T>,
        null: Option<T>,
    ) -> Vec<String> {
        batch
            .sequences()
            .map(|codes| self.decode_ctc(codes, null))
            .collect()
    }

    /// Rank the candidates of every item of a probability batch.
    ///
    /// ## Arguments
    /// * `probs` - the `(batch_size, max_length, classes)` probabilities.
    /// * `n` - the number of ranks to keep; see [`crate::decoders::DEFAULT_TOP_N`].
    fn decode_top_n(
        &self,
        probs: &ProbabilityBatch,
        n: usize,
    ) -> LCResult<Vec<RankedCandidates<T>>> {
        (0..probs.batch_size())
            .map(|idx| self.decode_top_n_item(probs, idx, n))
            .collect()
    }
}
