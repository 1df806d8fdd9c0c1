//! # Parallel Decoder

use std::sync::Arc;

use crate::{
    CodeBatch,
    LCResult,
    ProbabilityBatch,
    decoders::{LabelDecoder, RankedCandidates},
    types::CodeType,
};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches when available.
pub struct ParallelRayonDecoder<T: CodeType> {
    /// Wrapped decoder.
    pub inner: Arc<dyn LabelDecoder<T>>,

    _marker: std::marker::PhantomData<T>,
}

impl<T> ParallelRayonDecoder<T>
where
    T: CodeType,
{
    /// Create a new parallel label decoder.
    ///
    /// ## Arguments
    /// * `inner` - The label decoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonDecoder` instance.
    pub fn new(inner: Arc<dyn LabelDecoder<T>>) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> LabelDecoder<T> for ParallelRayonDecoder<T>
where
    T: CodeType,
{
    fn decode(
        &self,
        codes: &[T],
    ) -> String {
        self.inner.decode(codes)
    }

    fn decode_ctc(
        &self,
        codes: &[T],
        null: Option<T>,
    ) -> String {
        self.inner.decode_ctc(codes, null)
    }

    fn decode_top_n_item(
        &self,
        probs: &ProbabilityBatch,
        idx: usize,
        n: usize,
    ) -> LCResult<RankedCandidates<T>> {
        self.inner.decode_top_n_item(probs, idx, n)
    }

    fn decode_batch(
        &self,
        batch: &CodeBatch<T>,
    ) -> Vec<String> {
        use rayon::prelude::*;

        (0..batch.batch_size())
            .into_par_iter()
            .map(|idx| self.inner.decode(batch.sequence(idx)))
            .collect()
    }

    fn decode_ctc_batch(
        &self,
        batch: &CodeBatch<T>,
        null: Option<T>,
    ) -> Vec<String> {
        use rayon::prelude::*;

        (0..batch.batch_size())
            .into_par_iter()
            .map(|idx| self.inner.decode_ctc(batch.sequence(idx), null))
            .collect()
    }

    fn decode_top_n(
        &self,
        probs: &ProbabilityBatch,
        n: usize,
    ) -> LCResult<Vec<RankedCandidates<T>>> {
        use rayon::prelude::*;

        (0..probs.batch_size())
            .into_par_iter()
            .map(|idx| self.inner.decode_top_n_item(probs, idx, n))
            .collect()
    }
}
