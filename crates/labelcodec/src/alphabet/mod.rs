//! # Alphabet
//!
//! This module provides the alphabet table and related io mechanisms.
//!
//! An [`Alphabet`] holds two maps built together at construction:
//! * `code_symbols` - a [`CodeSymbolMap`] ``{ T -> String }``,
//! * `symbol_codes` - a [`SymbolCodeMap`] ``{ String -> T }``.
//!
//! The [`SymbolMode`] fixed at construction decides whether symbols are
//! characters or whitespace-delimited words.
pub mod io;

pub mod alphabet_options;
pub mod alphabet_types;
pub mod symbol_mode;
pub mod table;

#[doc(inline)]
pub use alphabet_options::AlphabetOptions;
#[doc(inline)]
pub use alphabet_types::{CodeSymbolMap, DEFAULT_BLANK_SYMBOL, DEFAULT_SYMBOL, SymbolCodeMap};
#[doc(inline)]
pub use symbol_mode::{SymbolIter, SymbolMode};
#[doc(inline)]
pub use table::Alphabet;
