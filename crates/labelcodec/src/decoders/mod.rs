//! # Label Decoders
//!
//! [`crate::Alphabet`] is the [`LabelDecoder`]; wrap it in
//! `ParallelRayonDecoder` (feature ``rayon``) for parallel batches.
//!
//! * [`LabelDecoder::decode`] - plain code to symbol mapping.
//! * [`LabelDecoder::decode_ctc`] - CTC collapse, then decode; see [`ctc`].
//! * [`LabelDecoder::decode_top_n`] - ranked alternatives from probabilities; see [`ranked`].
//!
//! ## Example
//!
//! ```rust
//! use labelcodec::{Alphabet, AlphabetOptions, LabelDecoder};
//!
//! let alphabet: Alphabet<u32> =
//!     Alphabet::from_pairs([(0, "a"), (1, "b")], &AlphabetOptions::default()).unwrap();
//! let blank = alphabet.blank_code().unwrap();
//!
//! assert_eq!(alphabet.decode(&[0, 1, 1]), "abb");
//! assert_eq!(alphabet.decode_ctc(&[blank, 0, 0, blank, 1, 1], None), "ab");
//! ```

pub mod alphabet_decoder;
pub mod ctc;
pub mod label_decoder;
pub mod ranked;

pub use ctc::ctc_collapse;
pub use label_decoder::LabelDecoder;
pub use ranked::{DEFAULT_TOP_N, RankedCandidates, rank_classes};
