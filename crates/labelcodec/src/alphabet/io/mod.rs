//! # Alphabet IO
//!
//! Alphabet tables are read from, and written to:
//! * TSV - `code\tsymbol` lines; see [`tsv_io`].
//! * JSON - a `{"code": "symbol"}` object; see [`json_io`].
//! * symbol lists - one symbol per line, code = line index; see [`symbol_list_io`].
//!
//! ## Loading An Alphabet
//!
//! ```rust,no_run
//! use labelcodec::alphabet::{
//!     Alphabet,
//!     AlphabetOptions,
//!     io::{TableFormat, load_alphabet_path},
//! };
//!
//! fn example() -> labelcodec::LCResult<Alphabet<u32>> {
//!     let path = "alphabet.tsv";
//!     let format = TableFormat::from_path(path).unwrap_or(TableFormat::Tsv);
//!     load_alphabet_path(path, format, &AlphabetOptions::default())
//! }
//! ```

pub mod json_io;
pub mod symbol_list_io;
pub mod tsv_io;

use std::{io::Write, path::Path};

#[doc(inline)]
pub use json_io::*;
#[doc(inline)]
pub use symbol_list_io::*;
#[doc(inline)]
pub use tsv_io::*;

use crate::{
    LCResult,
    LabelCodecError,
    alphabet::{Alphabet, AlphabetOptions},
    types::CodeType,
};

/// The on-disk format of an alphabet table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TableFormat {
    /// `code\tsymbol` lines.
    Tsv,

    /// A `{"code": "symbol"}` object.
    Json,

    /// One symbol per line.
    #[strum(serialize = "list", serialize = "symbol_list")]
    SymbolList,
}

impl TableFormat {
    /// Guess the format from a file extension.
    ///
    /// `.tsv`/`.tab` are TSV, `.json` is JSON, and `.txt`/`.list` are symbol lists.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "tsv" | "tab" => Some(Self::Tsv),
            "json" => Some(Self::Json),
            "txt" | "list" => Some(Self::SymbolList),
            _ => None,
        }
    }

    /// Build an [`Alphabet`] from text in this format.
    pub fn parse_alphabet<T: CodeType>(
        &self,
        text: &str,
        options: &AlphabetOptions,
    ) -> LCResult<Alphabet<T>> {
        match self {
            Self::Tsv => parse_tsv_alphabet(text, options),
            Self::Json => parse_json_alphabet(text, options),
            Self::SymbolList => parse_symbol_list_alphabet(text, options),
        }
    }

    /// Write an [`Alphabet`] in this format.
    ///
    /// Symbol lists require contiguous codes starting at 0.
    pub fn write_alphabet<T, W>(
        &self,
        alphabet: &Alphabet<T>,
        writer: &mut W,
    ) -> LCResult<()>
    where
        T: CodeType,
        W: Write,
    {
        match self {
            Self::Tsv => write_tsv_alphabet(alphabet, writer),
            Self::Json => write_json_alphabet(alphabet, writer),
            Self::SymbolList => {
                for (idx, (code, symbol)) in alphabet.sorted_rows(false).into_iter().enumerate() {
                    if code.to_usize() != Some(idx) {
                        return Err(LabelCodecError::Configuration(format!(
                            "symbol lists need contiguous codes; found {code} at row {idx}"
                        )));
                    }
                    writeln!(writer, "{symbol}")?;
                }
                writer.flush()?;
                Ok(())
            }
        }
    }
}

/// Load an [`Alphabet`] from a file in the given format.
pub fn load_alphabet_path<T, P>(
    path: P,
    format: TableFormat,
    options: &AlphabetOptions,
) -> LCResult<Alphabet<T>>
where
    T: CodeType,
    P: AsRef<Path>,
{
    match format {
        TableFormat::Tsv => load_tsv_alphabet_path(path, options),
        TableFormat::Json => load_json_alphabet_path(path, options),
        TableFormat::SymbolList => load_symbol_list_alphabet_path(path, options),
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(TableFormat::from_path("a/b.TSV"), Some(TableFormat::Tsv));
        assert_eq!(TableFormat::from_path("b.json"), Some(TableFormat::Json));
        assert_eq!(
            TableFormat::from_path("b.txt"),
            Some(TableFormat::SymbolList)
        );
        assert_eq!(TableFormat::from_path("b"), None);
        assert_eq!(TableFormat::from_path("b.csv"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(TableFormat::from_str("tsv").unwrap(), TableFormat::Tsv);
        assert_eq!(TableFormat::from_str("JSON").unwrap(), TableFormat::Json);
        assert_eq!(
            TableFormat::from_str("list").unwrap(),
            TableFormat::SymbolList
        );
    }

    #[test]
    fn test_format_conversion() {
        let options = AlphabetOptions::default();
        let alphabet: Alphabet<u32> = TableFormat::Tsv
            .parse_alphabet("0\ta\n1\tb\n2\tc", &options)
            .unwrap();

        for format in [TableFormat::Tsv, TableFormat::Json, TableFormat::SymbolList] {
            let mut buf: Vec<u8> = Vec::new();
            format.write_alphabet(&alphabet, &mut buf).unwrap();
            let text = String::from_utf8(buf).unwrap();

            let reloaded: Alphabet<u32> = format.parse_alphabet(&text, &options).unwrap();
            assert_eq!(reloaded, alphabet, "{format}");
        }
    }

    #[test]
    fn test_symbol_list_needs_contiguous_codes() {
        let alphabet: Alphabet<u32> = TableFormat::Tsv
            .parse_alphabet("0\ta\n2\tc", &AlphabetOptions::default())
            .unwrap();

        let mut buf: Vec<u8> = Vec::new();
        let res = TableFormat::SymbolList.write_alphabet(&alphabet, &mut buf);
        assert!(matches!(res, Err(LabelCodecError::Configuration(_))));
    }
}
