//! # Symbol List IO
//!
//! One symbol per line; the code of a symbol is its 0-based line index.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    LCResult,
    LabelCodecError,
    alphabet::{Alphabet, AlphabetOptions},
    types::CodeType,
};

/// Parse a symbol list into `(code, symbol)` rows.
///
/// Trailing newlines are ignored; any other empty line is a format error.
pub fn parse_symbol_list_rows<T: CodeType>(text: &str) -> LCResult<Vec<(T, String)>> {
    let text = text.trim_end_matches(['\n', '\r']);
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.lines()
        .enumerate()
        .map(|(idx, line)| {
            if line.is_empty() {
                return Err(LabelCodecError::format(Some(idx + 1), "empty symbol"));
            }
            let code = T::from_usize(idx).ok_or_else(|| {
                LabelCodecError::format(Some(idx + 1), format!("code {idx} is out of range"))
            })?;
            Ok((code, line.to_string()))
        })
        .collect()
}

/// Build an [`Alphabet`] from a symbol list.
pub fn parse_symbol_list_alphabet<T: CodeType>(
    text: &str,
    options: &AlphabetOptions,
) -> LCResult<Alphabet<T>> {
    Alphabet::from_pairs(parse_symbol_list_rows::<T>(text)?, options)
}

/// Build an [`Alphabet`] from a symbol list reader.
pub fn read_symbol_list_alphabet<T, R>(
    mut reader: R,
    options: &AlphabetOptions,
) -> LCResult<Alphabet<T>>
where
    T: CodeType,
    R: BufRead,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_symbol_list_alphabet(&text, options)
}

/// Load an [`Alphabet`] from a symbol list file.
pub fn load_symbol_list_alphabet_path<T, P>(
    path: P,
    options: &AlphabetOptions,
) -> LCResult<Alphabet<T>>
where
    T: CodeType,
    P: AsRef<Path>,
{
    log::debug!("loading symbol list alphabet: {}", path.as_ref().display());
    let reader = BufReader::new(File::open(path)?);
    read_symbol_list_alphabet(reader, options)
}
