//! # Alphabet Table

use crate::{
    LCResult,
    LabelCodecError,
    alphabet::{
        AlphabetOptions,
        CodeSymbolMap,
        DEFAULT_SYMBOL,
        SymbolCodeMap,
        SymbolMode,
        alphabet_types::DEFAULT_BLANK_SYMBOL,
    },
    types::{CodeType, hash_map_with_capacity},
};

/// A bidirectional `code <-> symbol` table.
///
/// Both directions are built together at construction, and the table is
/// immutable afterwards; share it as `Arc<Alphabet<T>>`.
///
/// * `default_code` is the largest *supplied* code; unknown symbols encode to it.
/// * the blank code, when present, is `default_code + 1`.
/// * [`len`](Self::len) is `max(code) + 1`, so codes need not be contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet<T: CodeType> {
    code_symbols: CodeSymbolMap<T>,
    symbol_codes: SymbolCodeMap<T>,
    blank: Option<T>,
    default_code: T,
    len: usize,
    mode: SymbolMode,
}

impl<T: CodeType> Alphabet<T> {
    /// Build an alphabet from `(code, symbol)` pairs.
    ///
    /// Pairs are applied in order: a repeated code keeps its last symbol, and
    /// a repeated symbol keeps its last code.
    ///
    /// ## Arguments
    /// * `pairs` - the `(code, symbol)` rows.
    /// * `options` - mode and blank configuration.
    ///
    /// ## Returns
    /// A `LabelCodecError::Configuration` error if `pairs` is empty,
    /// or if the table does not fit in `usize` / `T`.
    pub fn from_pairs<I, S>(
        pairs: I,
        options: &AlphabetOptions,
    ) -> LCResult<Self>
    where
        I: IntoIterator<Item = (T, S)>,
        S: Into<String>,
    {
        let pairs: Vec<(T, String)> = pairs.into_iter().map(|(c, s)| (c, s.into())).collect();

        let mut code_symbols: CodeSymbolMap<T> = hash_map_with_capacity(pairs.len() + 1);
        for (code, symbol) in &pairs {
            code_symbols.insert(*code, symbol.clone());
        }

        let default_code = code_symbols.keys().max().copied().ok_or_else(|| {
            LabelCodecError::Configuration("alphabet has no symbols".to_string())
        })?;

        let mut symbol_codes: SymbolCodeMap<T> = hash_map_with_capacity(code_symbols.len() + 1);
        for (code, symbol) in pairs {
            // Rows overwritten by a later use of the same code are gone.
            if code_symbols.get(&code) != Some(&symbol) {
                continue;
            }
            insert_symbol(&mut symbol_codes, symbol, code);
        }

        let mut max_code = default_code;
        let blank = if options.add_blank {
            let blank = default_code.checked_add(&T::one()).ok_or_else(|| {
                LabelCodecError::Configuration(format!(
                    "no room for a blank code after {default_code}"
                ))
            })?;
            code_symbols.insert(blank, options.blank_symbol.clone());
            insert_symbol(&mut symbol_codes, options.blank_symbol.clone(), blank);
            max_code = blank;
            Some(blank)
        } else {
            None
        };

        let len = max_code
            .to_usize()
            .and_then(|m| m.checked_add(1))
            .ok_or_else(|| {
                LabelCodecError::Configuration(format!("max code {max_code} exceeds usize"))
            })?;

        log::debug!(
            "built {} alphabet: {} symbols, len {}, blank {:?}",
            options.mode,
            code_symbols.len(),
            len,
            blank
        );

        Ok(Self {
            code_symbols,
            symbol_codes,
            blank,
            default_code,
            len,
            mode: options.mode,
        })
    }

    /// Build an alphabet from a `{ code -> symbol }` map.
    ///
    /// Rows are applied in ascending code order.
    pub fn from_map(
        code_symbols: CodeSymbolMap<T>,
        options: &AlphabetOptions,
    ) -> LCResult<Self> {
        let mut pairs: Vec<(T, String)> = code_symbols.into_iter().collect();
        pairs.sort_by_key(|(code, _)| *code);
        Self::from_pairs(pairs, options)
    }

    /// `max(code) + 1`, counting the blank code.
    ///
    /// This is the width of one-hot rows, probability vectors,
    /// and each PHOC bin.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.code_symbols.is_empty()
    }

    /// The number of `(code, symbol)` rows, counting the blank.
    pub fn num_symbols(&self) -> usize {
        self.code_symbols.len()
    }

    /// The symbol mode.
    pub fn mode(&self) -> SymbolMode {
        self.mode
    }

    /// The blank code, if the alphabet has one.
    pub fn blank_code(&self) -> Option<T> {
        self.blank
    }

    /// The blank symbol, if the alphabet has a blank code.
    pub fn blank_symbol(&self) -> Option<&str> {
        self.blank.and_then(|b| self.lookup_symbol(b))
    }

    /// The code unknown symbols encode to.
    pub fn default_code(&self) -> T {
        self.default_code
    }

    /// The symbol unknown codes decode to.
    pub fn default_symbol(&self) -> &'static str {
        DEFAULT_SYMBOL
    }

    /// Get the symbol of a code, if any.
    pub fn lookup_symbol(
        &self,
        code: T,
    ) -> Option<&str> {
        self.code_symbols.get(&code).map(String::as_str)
    }

    /// Get the code of a symbol, if any.
    pub fn lookup_code(
        &self,
        symbol: &str,
    ) -> Option<T> {
        self.symbol_codes.get(symbol).copied()
    }

    /// Get the symbol of a code, or the default symbol.
    pub fn symbol_or_default(
        &self,
        code: T,
    ) -> &str {
        self.lookup_symbol(code).unwrap_or(DEFAULT_SYMBOL)
    }

    /// Get the code of a symbol, or the default code.
    pub fn code_or_default(
        &self,
        symbol: &str,
    ) -> T {
        self.lookup_code(symbol).unwrap_or(self.default_code)
    }

    /// Does the table hold this code?
    pub fn contains_code(
        &self,
        code: T,
    ) -> bool {
        self.code_symbols.contains_key(&code)
    }

    /// Does the table hold this symbol?
    pub fn contains_symbol(
        &self,
        symbol: &str,
    ) -> bool {
        self.symbol_codes.contains_key(symbol)
    }

    /// The `{ code -> symbol }` map, including the blank row.
    pub fn code_symbols(&self) -> &CodeSymbolMap<T> {
        &self.code_symbols
    }

    /// The `{ symbol -> code }` map, including the blank row.
    pub fn symbol_codes(&self) -> &SymbolCodeMap<T> {
        &self.symbol_codes
    }

    /// The rows in ascending code order.
    ///
    /// ## Arguments
    /// * `include_blank` - keep the blank row.
    pub fn sorted_rows(
        &self,
        include_blank: bool,
    ) -> Vec<(T, &str)> {
        let mut rows: Vec<(T, &str)> = self
            .code_symbols
            .iter()
            .filter(|(code, _)| include_blank || Some(**code) != self.blank)
            .map(|(code, symbol)| (*code, symbol.as_str()))
            .collect();
        rows.sort_unstable_by_key(|(code, _)| *code);
        rows
    }

    /// Serialize as `code\tsymbol` lines, in ascending code order.
    ///
    /// The blank row is omitted, so the text reloads into the table
    /// this alphabet was built from.
    pub fn to_tsv(&self) -> String {
        self.sorted_rows(false)
            .into_iter()
            .map(|(code, symbol)| format!("{code}\t{symbol}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The options which reproduce this alphabet from its [`to_tsv`](Self::to_tsv) rows.
    pub fn options(&self) -> AlphabetOptions {
        AlphabetOptions::default()
            .with_mode(self.mode)
            .with_add_blank(self.blank.is_some())
            .with_blank_symbol(self.blank_symbol().unwrap_or(DEFAULT_BLANK_SYMBOL))
    }
}

fn insert_symbol<T: CodeType>(
    symbol_codes: &mut SymbolCodeMap<T>,
    symbol: String,
    code: T,
) {
    if let Some(prev) = symbol_codes.insert(symbol, code)
        && prev != code
    {
        log::warn!("symbol for code {prev} is shadowed by code {code}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Alphabet<u32> {
        Alphabet::from_pairs(
            [(0, "\u{2205}"), (1, "a"), (2, "b"), (3, "c")],
            &AlphabetOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_is_configuration_error() {
        let res = Alphabet::<u32>::from_pairs(Vec::<(u32, String)>::new(), &Default::default());
        assert!(matches!(res, Err(LabelCodecError::Configuration(_))));
    }

    #[test]
    fn test_blank_and_default() {
        let alphabet = abc();
        assert_eq!(alphabet.default_code(), 3);
        assert_eq!(alphabet.blank_code(), Some(4));
        assert_eq!(alphabet.blank_symbol(), Some("\u{2205}"));
        assert_eq!(alphabet.len(), 5);
        assert_eq!(alphabet.num_symbols(), 5);
        assert!(!alphabet.is_empty());

        // The blank row takes over the shared null symbol.
        assert_eq!(alphabet.lookup_code("\u{2205}"), Some(4));
        assert_eq!(alphabet.lookup_symbol(0), Some("\u{2205}"));
    }

    #[test]
    fn test_no_blank() {
        let alphabet: Alphabet<u32> = Alphabet::from_pairs(
            [(0, "a"), (1, "b")],
            &AlphabetOptions::default().with_add_blank(false),
        )
        .unwrap();
        assert_eq!(alphabet.blank_code(), None);
        assert_eq!(alphabet.blank_symbol(), None);
        assert_eq!(alphabet.default_code(), 1);
        assert_eq!(alphabet.len(), 2);
    }

    #[test]
    fn test_gaps() {
        let alphabet: Alphabet<u16> =
            Alphabet::from_pairs([(2, "x"), (7, "y")], &Default::default()).unwrap();
        assert_eq!(alphabet.len(), 9);
        assert_eq!(alphabet.num_symbols(), 3);
        assert!(!alphabet.contains_code(3));
        assert_eq!(alphabet.symbol_or_default(3), ".");
        assert_eq!(alphabet.code_or_default("z"), 7);
    }

    #[test]
    fn test_duplicates() {
        // Last code for a symbol wins.
        let alphabet: Alphabet<u32> =
            Alphabet::from_pairs([(0, "a"), (1, "a"), (2, "b")], &Default::default()).unwrap();
        assert_eq!(alphabet.lookup_code("a"), Some(1));
        assert_eq!(alphabet.lookup_symbol(0), Some("a"));

        // Last symbol for a code wins.
        let alphabet: Alphabet<u32> =
            Alphabet::from_pairs([(0, "a"), (0, "b")], &Default::default()).unwrap();
        assert_eq!(alphabet.lookup_symbol(0), Some("b"));
        assert!(!alphabet.contains_symbol("a"));
    }

    #[test]
    fn test_blank_overflow() {
        let res = Alphabet::<u8>::from_pairs([(255u8, "z")], &Default::default());
        assert!(matches!(res, Err(LabelCodecError::Configuration(_))));

        let alphabet =
            Alphabet::<u8>::from_pairs([(255u8, "z")], &AlphabetOptions::default().with_add_blank(false))
                .unwrap();
        assert_eq!(alphabet.len(), 256);
    }

    #[test]
    fn test_to_tsv() {
        let alphabet: Alphabet<u32> =
            Alphabet::from_pairs([(2, "b"), (0, "x"), (1, "a")], &Default::default()).unwrap();
        assert_eq!(alphabet.to_tsv(), "0\tx\n1\ta\n2\tb");
        assert_eq!(
            alphabet.sorted_rows(true),
            vec![(0, "x"), (1, "a"), (2, "b"), (3, "\u{2205}")]
        );
    }

    #[test]
    fn test_from_map() {
        let map: CodeSymbolMap<u32> = [(1, "a".to_string()), (0, "b".to_string())]
            .into_iter()
            .collect();
        let alphabet = Alphabet::from_map(map, &Default::default()).unwrap();
        assert_eq!(alphabet.lookup_code("a"), Some(1));
        assert_eq!(alphabet.blank_code(), Some(2));

        let rebuilt = alphabet.options().build(alphabet.sorted_rows(false)).unwrap();
        assert_eq!(rebuilt, alphabet);
    }
}
