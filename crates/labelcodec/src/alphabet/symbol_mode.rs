//! # Symbol Modes
//!
//! A [`SymbolMode`] decides how text is cut into symbols, and how decoded
//! symbols are glued back together.

/// The tokenization mode of an [`crate::Alphabet`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SymbolMode {
    /// Every Unicode scalar value is a symbol; decoded symbols are joined with `""`.
    #[default]
    Character,

    /// Every whitespace-delimited word is a symbol; decoded symbols are joined with `" "`.
    Dictionary,
}

impl SymbolMode {
    /// The separator placed between decoded symbols.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::Character => "",
            Self::Dictionary => " ",
        }
    }

    /// Split text into symbols.
    ///
    /// Dictionary mode never yields empty words.
    pub fn split<'a>(
        &self,
        text: &'a str,
    ) -> SymbolIter<'a> {
        match self {
            Self::Character => SymbolIter::Character {
                text,
                chars: text.char_indices(),
            },
            Self::Dictionary => SymbolIter::Dictionary(text.split_whitespace()),
        }
    }

    /// Join decoded symbols into text.
    pub fn join<I, S>(
        &self,
        symbols: I,
    ) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sep = self.separator();
        let mut buf = String::new();
        for (idx, symbol) in symbols.into_iter().enumerate() {
            if idx > 0 {
                buf.push_str(sep);
            }
            buf.push_str(symbol.as_ref());
        }
        buf
    }
}

/// Iterator over the symbols of a text; see [`SymbolMode::split`].
#[derive(Debug, Clone)]
pub enum SymbolIter<'a> {
    /// One item per `char`.
    Character {
        /// The source text.
        text: &'a str,

        /// Position cursor.
        chars: core::str::CharIndices<'a>,
    },

    /// One item per word.
    Dictionary(core::str::SplitWhitespace<'a>),
}

impl<'a> Iterator for SymbolIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Character { text, chars } => {
                let (idx, c) = chars.next()?;
                Some(&text[idx..idx + c.len_utf8()])
            }
            Self::Dictionary(words) => words.next(),
        }
    }
}
