//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a class code.
///
/// These are constrained to be unsigned primitive integers;
/// the padding value of a [`crate::CodeBatch`] is `T::zero()`.
pub trait CodeType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> CodeType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type LCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> LCHashMap<K, V> {
            LCHashMap::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type LCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> LCHashMap<K, V> {
            LCHashMap::with_capacity(capacity)
        }
    }
}

/// Compile-time check that a value is `Send`.
pub fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: &S) {}
