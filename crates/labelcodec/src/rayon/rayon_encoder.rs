//! # Parallel Encoder

use std::sync::Arc;

use crate::{CodeBatch, encoders::LabelEncoder, types::CodeType};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches when available.
pub struct ParallelRayonEncoder<T: CodeType> {
    /// Inner encoder.
    pub inner: Arc<dyn LabelEncoder<T>>,

    _marker: std::marker::PhantomData<T>,
}

impl<T> ParallelRayonEncoder<T>
where
    T: CodeType,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The label encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: Arc<dyn LabelEncoder<T>>) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> LabelEncoder<T> for ParallelRayonEncoder<T>
where
    T: CodeType,
{
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.inner.encode(text)
    }

    fn encode_batch(
        &self,
        texts: &[&str],
    ) -> CodeBatch<T> {
        use rayon::prelude::*;

        let rows: Vec<Vec<T>> = texts.par_iter().map(|text| self.inner.encode(text)).collect();

        CodeBatch::from_rows(&rows)
    }
}
