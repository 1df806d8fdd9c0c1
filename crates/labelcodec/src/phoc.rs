//! # PHOC Histograms
//!
//! A Pyramidal Histogram Of Characters marks which symbols occur in which
//! region of a sequence. Each pyramid level splits the sequence into equal
//! fractional bins; a symbol at position `i` occupies the unit cell
//! `[i, i + 1)` and contributes its overlap with each bin.
//!
//! The bins of all levels are concatenated, one [`Alphabet::len`] wide
//! histogram per bin, and saturated at `1.0`: the result is a presence
//! indicator, not a count.
//!
//! ```rust
//! use labelcodec::{Alphabet, AlphabetOptions, PhocPyramid};
//!
//! let alphabet: Alphabet<u32> = Alphabet::from_pairs(
//!     [(0, "\u{2205}"), (1, "a"), (2, "b"), (3, "c")],
//!     &AlphabetOptions::default().with_add_blank(false),
//! )
//! .unwrap();
//! let pyramid = PhocPyramid::new(vec![1, 2]).unwrap();
//!
//! let phoc = alphabet.phoc("abc", &pyramid);
//! assert_eq!(phoc.len(), 4 * 3);
//! // 'b' straddles the two halves of level 2.
//! assert_eq!(phoc[4 + 2], 0.5);
//! assert_eq!(phoc[8 + 2], 0.5);
//! ```

use core::str::FromStr;

use crate::{Alphabet, LCResult, LabelCodecError, encoders::LabelEncoder, types::CodeType};

/// The partition counts of a PHOC pyramid, e.g. `[2, 3, 5]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhocPyramid {
    levels: Vec<usize>,
}

impl PhocPyramid {
    /// Create a pyramid.
    ///
    /// ## Returns
    /// A `LabelCodecError::Configuration` error if a level is 0.
    pub fn new(levels: Vec<usize>) -> LCResult<Self> {
        if levels.contains(&0) {
            return Err(LabelCodecError::Configuration(format!(
                "pyramid levels must be >= 1: {levels:?}"
            )));
        }
        Ok(Self { levels })
    }

    /// The partition counts.
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// The total number of bins over all levels.
    pub fn num_bins(&self) -> usize {
        self.levels.iter().sum()
    }

    /// The length of a PHOC vector over `classes` histogram slots.
    pub fn histogram_len(
        &self,
        classes: usize,
    ) -> usize {
        classes * self.num_bins()
    }

    /// Iterate over `(partition, partitions)` for every bin, level by level.
    pub fn bins(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.levels
            .iter()
            .flat_map(|&parts| (0..parts).map(move |part| (part, parts)))
    }
}

impl FromStr for PhocPyramid {
    type Err = LabelCodecError;

    /// Parse comma separated levels, e.g. `"2,3,5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let levels = s
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse::<usize>().map_err(|e| {
                    LabelCodecError::Configuration(format!("invalid pyramid level {l:?}: {e}"))
                })
            })
            .collect::<LCResult<Vec<usize>>>()?;
        Self::new(levels)
    }
}

/// The `(position, weight)` pairs of one bin.
///
/// For `seq_len` positions split into `partitions` bins, bin `partition`
/// spans `[L·p/P, L·(p+1)/P)`; each weight is the overlap of that span
/// with `[i, i + 1)`, and zero weights are skipped.
pub fn bin_weights(
    seq_len: usize,
    partition: usize,
    partitions: usize,
) -> impl Iterator<Item = (usize, f32)> {
    let begin = (seq_len * partition) as f64 / partitions as f64;
    let end = (seq_len * (partition + 1)) as f64 / partitions as f64;

    let first = begin.floor() as usize;
    let last = (end.ceil() as usize).min(seq_len);

    (first..last).filter_map(move |i| {
        let lo = begin.max(i as f64);
        let hi = end.min((i + 1) as f64);
        let weight = hi - lo;
        (weight > 0.0).then_some((i, weight as f32))
    })
}

/// Build a PHOC vector from histogram slot indices.
///
/// ## Arguments
/// * `slots` - the slot of each position; every slot must be `< classes`.
/// * `classes` - the width of one bin histogram.
/// * `pyramid` - the pyramid levels.
pub fn phoc_histogram(
    slots: &[usize],
    classes: usize,
    pyramid: &PhocPyramid,
) -> Vec<f32> {
    let mut phoc = vec![0.0f32; pyramid.histogram_len(classes)];
    for (bin, (partition, partitions)) in pyramid.bins().enumerate() {
        let hist = &mut phoc[bin * classes..(bin + 1) * classes];
        for (pos, weight) in bin_weights(slots.len(), partition, partitions) {
            hist[slots[pos]] += weight;
        }
    }
    for value in phoc.iter_mut() {
        if *value > 1.0 {
            *value = 1.0;
        }
    }
    phoc
}

impl<T: CodeType> Alphabet<T> {
    /// Compute the PHOC vector of a text.
    ///
    /// The text is encoded first, so the vector is always
    /// `len() * pyramid.num_bins()` long.
    pub fn phoc(
        &self,
        text: &str,
        pyramid: &PhocPyramid,
    ) -> Vec<f32> {
        let slots: Vec<usize> = self
            .encode(text)
            .into_iter()
            .filter_map(|code| code.to_usize())
            .collect();
        phoc_histogram(&slots, self.len(), pyramid)
    }

    /// Compute the PHOC vector of an encoded sequence.
    ///
    /// ## Returns
    /// A `LabelCodecError::Shape` error for a code `>= len()`,
    /// which has no histogram slot.
    pub fn phoc_codes(
        &self,
        codes: &[T],
        pyramid: &PhocPyramid,
    ) -> LCResult<Vec<f32>> {
        let classes = self.len();
        let slots = codes
            .iter()
            .map(|code| {
                code.to_usize().filter(|&s| s < classes).ok_or_else(|| {
                    LabelCodecError::Shape(format!(
                        "code {code} has no slot in a histogram of {classes}"
                    ))
                })
            })
            .collect::<LCResult<Vec<usize>>>()?;
        Ok(phoc_histogram(&slots, classes, pyramid))
    }
}
