//! # Alphabet Encoder

use crate::{Alphabet, encoders::LabelEncoder, types::CodeType};

impl<T: CodeType> LabelEncoder<T> for Alphabet<T> {
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        self.mode()
            .split(text)
            .map(|symbol| self.code_or_default(symbol))
            .collect()
    }
}

impl<T: CodeType> Alphabet<T> {
    /// Encode text as one-hot rows.
    ///
    /// ## Returns
    /// One row of [`len`](Self::len) values per encoded symbol,
    /// holding a single `1.0` at the symbol's code.
    pub fn encode_onehot(
        &self,
        text: &str,
    ) -> Vec<Vec<f32>> {
        self.encode(text)
            .into_iter()
            .map(|code| {
                let mut row = vec![0.0; self.len()];
                if let Some(slot) = code.to_usize().and_then(|idx| row.get_mut(idx)) {
                    *slot = 1.0;
                }
                row
            })
            .collect()
    }
}
