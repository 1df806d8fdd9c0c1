//! # Batch Arrays
//!
//! Row-major rectangular arrays exchanged with a sequence model:
//! * [`CodeBatch`] - `(batch_size, width)` codes, zero padded, with per-row lengths.
//! * [`ProbabilityBatch`] - `(batch_size, max_length, classes)` probabilities,
//!   with per-item lengths.

use crate::{LCResult, LabelCodecError, types::CodeType};

fn check_lengths(
    lengths: &[usize],
    batch_size: usize,
    width: usize,
) -> LCResult<()> {
    if lengths.len() != batch_size {
        return Err(LabelCodecError::Shape(format!(
            "{} lengths for a batch of {batch_size}",
            lengths.len()
        )));
    }
    if let Some((idx, len)) = lengths.iter().enumerate().find(|(_, l)| **l > width) {
        return Err(LabelCodecError::Shape(format!(
            "length {len} of item {idx} exceeds width {width}"
        )));
    }
    Ok(())
}

fn check_size(
    actual: usize,
    shape: &[usize],
) -> LCResult<()> {
    let expected = shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| LabelCodecError::Shape(format!("shape {shape:?} overflows usize")))?;
    if actual != expected {
        return Err(LabelCodecError::Shape(format!(
            "{actual} values do not fill shape {shape:?}"
        )));
    }
    Ok(())
}

/// A zero-padded `(batch_size, width)` batch of code sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBatch<T: CodeType> {
    codes: Vec<T>,
    batch_size: usize,
    width: usize,
    lengths: Vec<usize>,
}

impl<T: CodeType> CodeBatch<T> {
    /// Wrap a row-major array; every row is treated as full width.
    ///
    /// ## Returns
    /// A `LabelCodecError::Shape` error if `codes.len() != batch_size * width`.
    pub fn new(
        codes: Vec<T>,
        batch_size: usize,
        width: usize,
    ) -> LCResult<Self> {
        check_size(codes.len(), &[batch_size, width])?;
        Ok(Self {
            codes,
            batch_size,
            width,
            lengths: vec![width; batch_size],
        })
    }

    /// Replace the per-row lengths.
    ///
    /// ## Returns
    /// A `LabelCodecError::Shape` error if there is not exactly one length
    /// per row, or if a length exceeds the width.
    pub fn with_lengths(
        mut self,
        lengths: Vec<usize>,
    ) -> LCResult<Self> {
        check_lengths(&lengths, self.batch_size, self.width)?;
        self.lengths = lengths;
        Ok(self)
    }

    /// Pack sequences into a batch padded to the longest one.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self {
        let batch_size = rows.len();
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);

        let mut codes = vec![T::zero(); batch_size * width];
        let mut lengths = Vec::with_capacity(batch_size);
        for (row, dst) in rows.iter().zip(codes.chunks_exact_mut(width.max(1))) {
            let row = row.as_ref();
            dst[..row.len()].copy_from_slice(row);
            lengths.push(row.len());
        }
        // `chunks_exact_mut(1)` over an empty buffer yields nothing.
        lengths.resize(batch_size, 0);

        Self {
            codes,
            batch_size,
            width,
            lengths,
        }
    }

    /// `(batch_size, width)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.batch_size, self.width)
    }

    /// The number of rows.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The per-row lengths.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// The row-major code array, padding included.
    pub fn codes(&self) -> &[T] {
        &self.codes
    }

    /// A full-width row, padding included.
    ///
    /// ## Panics
    /// If `idx >= batch_size()`.
    pub fn row(
        &self,
        idx: usize,
    ) -> &[T] {
        &self.codes[idx * self.width..(idx + 1) * self.width]
    }

    /// A row, cut to its length.
    ///
    /// ## Panics
    /// If `idx >= batch_size()`.
    pub fn sequence(
        &self,
        idx: usize,
    ) -> &[T] {
        &self.row(idx)[..self.lengths[idx]]
    }

    /// Iterate over all rows, each cut to its length.
    pub fn sequences(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.batch_size).map(|idx| self.sequence(idx))
    }
}

/// A zero-padded `(batch_size, max_length, classes)` batch of
/// per-position probability vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityBatch {
    probs: Vec<f32>,
    batch_size: usize,
    max_length: usize,
    classes: usize,
    lengths: Vec<usize>,
}

impl ProbabilityBatch {
    /// Wrap a row-major array; every item is treated as `max_length` long.
    ///
    /// ## Returns
    /// A `LabelCodecError::Shape` error if the data does not fill the shape,
    /// or if `classes` is 0.
    pub fn new(
        probs: Vec<f32>,
        batch_size: usize,
        max_length: usize,
        classes: usize,
    ) -> LCResult<Self> {
        if classes == 0 {
            return Err(LabelCodecError::Shape(
                "probability vectors must have at least one class".to_string(),
            ));
        }
        check_size(probs.len(), &[batch_size, max_length, classes])?;
        Ok(Self {
            probs,
            batch_size,
            max_length,
            classes,
            lengths: vec![max_length; batch_size],
        })
    }

    /// Replace the per-item lengths.
    pub fn with_lengths(
        mut self,
        lengths: Vec<usize>,
    ) -> LCResult<Self> {
        check_lengths(&lengths, self.batch_size, self.max_length)?;
        self.lengths = lengths;
        Ok(self)
    }

    /// Pack `[item][position][class]` sequences, padded to the longest item.
    ///
    /// ## Returns
    /// A `LabelCodecError::Shape` error if the vectors disagree on the class count.
    pub fn from_sequences(
        sequences: &[Vec<Vec<f32>>],
        classes: usize,
    ) -> LCResult<Self> {
        let batch_size = sequences.len();
        let max_length = sequences.iter().map(Vec::len).max().unwrap_or(0);

        let mut probs = Vec::with_capacity(batch_size * max_length * classes);
        let mut lengths = Vec::with_capacity(batch_size);
        for seq in sequences {
            for step in seq {
                if step.len() != classes {
                    return Err(LabelCodecError::Shape(format!(
                        "probability vector of {} classes, expected {classes}",
                        step.len()
                    )));
                }
                probs.extend_from_slice(step);
            }
            probs.resize(probs.len() + (max_length - seq.len()) * classes, 0.0);
            lengths.push(seq.len());
        }

        Self::new(probs, batch_size, max_length, classes)?.with_lengths(lengths)
    }

    /// `(batch_size, max_length, classes)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.batch_size, self.max_length, self.classes)
    }

    /// The number of items.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The number of classes per probability vector.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// The per-item lengths.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// The probability vectors of an item, cut to its length.
    ///
    /// ## Panics
    /// If `idx >= batch_size()`.
    pub fn steps(
        &self,
        idx: usize,
    ) -> core::slice::ChunksExact<'_, f32> {
        let stride = self.max_length * self.classes;
        let start = idx * stride;
        self.probs[start..start + self.lengths[idx] * self.classes].chunks_exact(self.classes)
    }
}
