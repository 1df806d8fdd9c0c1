//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel encoders and decoders.
//!
//! The wrappers parallelize across the items of a batch; single
//! sequences are delegated to the wrapped codec unchanged.

mod rayon_decoder;
mod rayon_encoder;

pub use rayon_decoder::ParallelRayonDecoder;
pub use rayon_encoder::ParallelRayonEncoder;
