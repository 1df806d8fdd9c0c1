//! # Alphabet Types

use crate::types::LCHashMap;

/// `{ T -> String }` map.
///
/// ## Style Hints
/// Instance names should prefer `code_symbols`, or `code_symbol_map`.
pub type CodeSymbolMap<T> = LCHashMap<T, String>;

/// `{ String -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `symbol_codes`, or `symbol_code_map`.
pub type SymbolCodeMap<T> = LCHashMap<String, T>;

/// The symbol decoded for codes missing from an alphabet.
pub const DEFAULT_SYMBOL: &str = ".";

/// The symbol given to the blank (CTC null) code.
pub const DEFAULT_BLANK_SYMBOL: &str = "\u{2205}";
