//! # Label Encoder Trait

use crate::{CodeBatch, types::CodeType};

/// Trait for label encoders.
///
/// Encoding never fails; symbols missing from the alphabet become its
/// default code.
pub trait LabelEncoder<T: CodeType>: Send + Sync {
    /// Encode text into codes.
    ///
    /// ## Arguments
    /// * `text` - the text to encode.
    ///
    /// ## Returns
    /// One code per symbol of `text`.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T>;

    /// Encode a batch of texts into a zero-padded [`CodeBatch`].
    ///
    /// The batch width is the longest encoded length; 0 when every text is empty.
    ///
    /// ## Arguments
    /// * `texts` - the texts to encode.
    fn encode_batch(
        &self,
        texts: &[&str],
    ) -> CodeBatch<T> {
        let rows: Vec<Vec<T>> = texts.iter().map(|text| self.encode(text)).collect();
        CodeBatch::from_rows(&rows)
    }
}
