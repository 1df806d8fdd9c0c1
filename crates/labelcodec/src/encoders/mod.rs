//! # Label Encoders
//!
//! [`crate::Alphabet`] is the [`LabelEncoder`]; wrap it in
//! `ParallelRayonEncoder` (feature ``rayon``) for parallel batches.
//!
//! ## Example
//!
//! ```rust
//! use labelcodec::{Alphabet, AlphabetOptions, LabelEncoder};
//!
//! let alphabet: Alphabet<u32> =
//!     Alphabet::from_pairs([(0, "a"), (1, "b")], &AlphabetOptions::default()).unwrap();
//!
//! assert_eq!(alphabet.encode("abba"), vec![0, 1, 1, 0]);
//!
//! let batch = alphabet.encode_batch(&["ab", "a"]);
//! assert_eq!(batch.codes(), &[0, 1, 0, 0]);
//! assert_eq!(batch.lengths(), &[2, 1]);
//! ```

pub mod alphabet_encoder;
pub mod label_encoder;

pub use label_encoder::LabelEncoder;
