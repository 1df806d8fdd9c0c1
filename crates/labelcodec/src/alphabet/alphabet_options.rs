//! # Alphabet Options
//!
//! Build-time settings for an [`Alphabet`]: the symbol mode, the blank code
//! and its symbol.

use crate::{
    LCResult,
    alphabet::{Alphabet, DEFAULT_BLANK_SYMBOL, SymbolMode},
    types::CodeType,
};

/// Options for configuring an [`Alphabet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetOptions {
    /// How text is split into symbols.
    pub mode: SymbolMode,

    /// Append a blank code at `max(code) + 1`.
    pub add_blank: bool,

    /// The symbol of the blank code.
    pub blank_symbol: String,
}

impl Default for AlphabetOptions {
    fn default() -> Self {
        Self {
            mode: SymbolMode::default(),
            add_blank: true,
            blank_symbol: DEFAULT_BLANK_SYMBOL.to_string(),
        }
    }
}

impl AlphabetOptions {
    /// Sets the symbol mode.
    pub fn set_mode(
        &mut self,
        mode: SymbolMode,
    ) {
        self.mode = mode;
    }

    /// Sets the symbol mode.
    pub fn with_mode(
        mut self,
        mode: SymbolMode,
    ) -> Self {
        self.set_mode(mode);
        self
    }

    /// Selects [`SymbolMode::Dictionary`] when `dictionary` is true,
    /// and [`SymbolMode::Character`] otherwise.
    pub fn with_dictionary(
        self,
        dictionary: bool,
    ) -> Self {
        self.with_mode(if dictionary {
            SymbolMode::Dictionary
        } else {
            SymbolMode::Character
        })
    }

    /// Sets whether a blank code is appended.
    pub fn set_add_blank(
        &mut self,
        add_blank: bool,
    ) {
        self.add_blank = add_blank;
    }

    /// Sets whether a blank code is appended.
    pub fn with_add_blank(
        mut self,
        add_blank: bool,
    ) -> Self {
        self.set_add_blank(add_blank);
        self
    }

    /// Sets the blank symbol.
    pub fn with_blank_symbol<S: Into<String>>(
        mut self,
        blank_symbol: S,
    ) -> Self {
        self.blank_symbol = blank_symbol.into();
        self
    }

    /// Build an [`Alphabet`] from `(code, symbol)` pairs.
    ///
    /// See [`Alphabet::from_pairs`].
    pub fn build<T, I, S>(
        &self,
        pairs: I,
    ) -> LCResult<Alphabet<T>>
    where
        T: CodeType,
        I: IntoIterator<Item = (T, S)>,
        S: Into<String>,
    {
        Alphabet::from_pairs(pairs, self)
    }
}
