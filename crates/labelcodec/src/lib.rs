//! # `labelcodec` Alphabet Label Codec
//!
//! Bidirectional mapping between text and integer class codes, for
//! training and decoding sequence recognizers (handwriting / OCR).
//!
//! See:
//! * [`alphabet`] to build, load, and save [`Alphabet`] tables.
//! * [`encoders`] to encode text into codes.
//! * [`decoders`] to decode codes into text, including CTC collapse and
//!   ranked top-N candidates.
//! * [`phoc`] for Pyramidal Histogram Of Characters vectors.
//! * [`batch`] for the padded numeric array boundary.
//!
//! Built-in alphabets are available through:
//! * [`pretrained`]
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all ``HashMap`` implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::LCHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables batch parallelism wrappers using the ``rayon`` crate.
//!
//! ## Example
//!
//! ```rust
//! use labelcodec::{
//!     Alphabet,
//!     AlphabetOptions,
//!     LCResult,
//!     LabelDecoder,
//!     LabelEncoder,
//!     alphabet::io::parse_tsv_alphabet,
//! };
//!
//! fn example() -> LCResult<()> {
//!     let alphabet: Alphabet<u32> =
//!         parse_tsv_alphabet("0\t\u{2205}\n1\ta\n2\tb\n3\tc", &AlphabetOptions::default())?;
//!
//!     let codes = alphabet.encode("cab");
//!     assert_eq!(codes, vec![3, 1, 2]);
//!     assert_eq!(alphabet.decode(&codes), "cab");
//!
//!     let blank = alphabet.blank_code().unwrap();
//!     assert_eq!(alphabet.decode_ctc(&[blank, 1, 1, blank, 2], None), "ab");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod alphabet;
pub mod batch;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod phoc;
pub mod pretrained;
pub mod types;

#[doc(inline)]
pub use alphabet::{Alphabet, AlphabetOptions, SymbolMode};
#[doc(inline)]
pub use batch::{CodeBatch, ProbabilityBatch};
#[doc(inline)]
pub use decoders::{LabelDecoder, RankedCandidates};
#[doc(inline)]
pub use encoders::LabelEncoder;
#[doc(inline)]
pub use errors::{LCResult, LabelCodecError};
#[doc(inline)]
pub use phoc::PhocPyramid;
#[doc(inline)]
pub use types::CodeType;
