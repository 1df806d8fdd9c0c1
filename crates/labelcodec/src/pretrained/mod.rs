//! # Built-in Alphabets
//!
//! Process-wide, immutable alphabets for common character sets.
//!
//! Each is built once, on first use, and shared as an `Arc`:
//!
//! | name           | codes                                          | blank |
//! |----------------|------------------------------------------------|-------|
//! | `alphanumeric` | `0: '∅'`, `1..=26: a-z`, `27..=52: A-Z`, `53..=62: 0-9` | 63 |
//! | `letters`      | `0: '∅'`, `1..=26: a-z`, `27..=52: A-Z`        | 53    |
//!
//! ```rust
//! use labelcodec::{LabelDecoder, LabelEncoder, pretrained::BuiltinAlphabet};
//!
//! let alphabet = BuiltinAlphabet::Alphanumeric.load().unwrap();
//! assert_eq!(alphabet.len(), 64);
//! assert_eq!(alphabet.encode("aZ0"), vec![1, 52, 53]);
//! assert_eq!(alphabet.decode(&[8, 9]), "hi");
//! ```

use std::sync::{Arc, LazyLock};

use crate::{Alphabet, AlphabetOptions, LCResult, LabelCodecError, SymbolMode};

/// The placeholder symbol at code 0 of the built-in alphabets.
pub const NULL_SYMBOL: &str = "\u{2205}";

/// ASCII letters, lowercase first.
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII digits.
pub const ASCII_DIGITS: &str = "0123456789";

/// The built-in alphabets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BuiltinAlphabet {
    /// `∅`, ASCII letters and digits.
    Alphanumeric,

    /// `∅` and ASCII letters.
    Letters,
}

static ALPHANUMERIC: LazyLock<Option<Arc<Alphabet<u32>>>> =
    LazyLock::new(|| build_builtin(BuiltinAlphabet::Alphanumeric));

static LETTERS: LazyLock<Option<Arc<Alphabet<u32>>>> =
    LazyLock::new(|| build_builtin(BuiltinAlphabet::Letters));

fn build_builtin(which: BuiltinAlphabet) -> Option<Arc<Alphabet<u32>>> {
    match which.build() {
        Ok(alphabet) => Some(Arc::new(alphabet)),
        Err(err) => {
            log::error!("failed to build the {which} alphabet: {err}");
            None
        }
    }
}

impl BuiltinAlphabet {
    /// The symbols, in code order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        let tail = match self {
            Self::Alphanumeric => ASCII_DIGITS,
            Self::Letters => "",
        };
        core::iter::once(NULL_SYMBOL)
            .chain(SymbolMode::Character.split(ASCII_LETTERS))
            .chain(SymbolMode::Character.split(tail))
    }

    /// Build a fresh alphabet with the given options.
    pub fn build_with_options(
        &self,
        options: &AlphabetOptions,
    ) -> LCResult<Alphabet<u32>> {
        Alphabet::from_pairs((0u32..).zip(self.symbols()), options)
    }

    /// Build a fresh alphabet with the default options.
    pub fn build(&self) -> LCResult<Alphabet<u32>> {
        self.build_with_options(&AlphabetOptions::default())
    }

    /// The shared instance; built on first use.
    pub fn load(&self) -> LCResult<Arc<Alphabet<u32>>> {
        let shared: &Option<Arc<Alphabet<u32>>> = match self {
            Self::Alphanumeric => &ALPHANUMERIC,
            Self::Letters => &LETTERS,
        };
        shared.clone().ok_or_else(|| {
            LabelCodecError::Configuration(format!("built-in alphabet {self} is unavailable"))
        })
    }
}

/// The shared `alphanumeric` alphabet.
pub fn alphanumeric() -> LCResult<Arc<Alphabet<u32>>> {
    BuiltinAlphabet::Alphanumeric.load()
}

/// The shared `letters` alphabet.
pub fn letters() -> LCResult<Arc<Alphabet<u32>>> {
    BuiltinAlphabet::Letters.load()
}

/// List the built-in alphabet names.
pub fn list_builtins() -> Vec<&'static str> {
    use strum::IntoEnumIterator;

    BuiltinAlphabet::iter().map(<&'static str>::from).collect()
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;
    use crate::{LabelDecoder, LabelEncoder};

    #[test]
    fn test_alphanumeric() {
        let alphabet = alphanumeric().unwrap();
        assert_eq!(alphabet.len(), 64);
        assert_eq!(alphabet.default_code(), 62);
        assert_eq!(alphabet.blank_code(), Some(63));
        assert_eq!(alphabet.lookup_symbol(0), Some(NULL_SYMBOL));
        assert_eq!(alphabet.lookup_code("a"), Some(1));
        assert_eq!(alphabet.lookup_code("A"), Some(27));
        assert_eq!(alphabet.lookup_code("9"), Some(62));

        let text = "Hello World 42";
        assert_eq!(alphabet.decode(&alphabet.encode("Hello42")), "Hello42");
        // ' ' is not in the table.
        assert_eq!(alphabet.decode(&alphabet.encode(text)), "Hello9World942");
    }

    #[test]
    fn test_letters() {
        let alphabet = letters().unwrap();
        assert_eq!(alphabet.len(), 54);
        assert_eq!(alphabet.blank_code(), Some(53));
        assert_eq!(alphabet.lookup_code("Z"), Some(52));
        assert_eq!(alphabet.lookup_code("0"), None);
    }

    #[test]
    fn test_shared() {
        let a = BuiltinAlphabet::Letters.load().unwrap();
        let b = letters().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_build_with_options() {
        let alphabet = BuiltinAlphabet::Letters
            .build_with_options(&AlphabetOptions::default().with_add_blank(false))
            .unwrap();
        assert_eq!(alphabet.len(), 53);
        assert_eq!(alphabet.blank_code(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(list_builtins(), vec!["alphanumeric", "letters"]);
        assert_eq!(
            BuiltinAlphabet::from_str("Letters").unwrap(),
            BuiltinAlphabet::Letters
        );
        assert!(BuiltinAlphabet::from_str("digits").is_err());
    }
}
