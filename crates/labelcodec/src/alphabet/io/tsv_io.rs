//! # TSV Alphabet IO
//!
//! Lines are:
//! ```terminaloutput
//! {CODE}\t{SYMBOL}
//! ```
//!
//! Everything after the first tab is the symbol; further tabs are dropped
//! (`"3\ta\tb"` reads as `(3, "ab")`).

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    LCResult,
    LabelCodecError,
    alphabet::{Alphabet, AlphabetOptions},
    types::CodeType,
};

/// Parse TSV text into `(code, symbol)` rows, in file order.
///
/// Leading and trailing line breaks are ignored; symbols keep surrounding
/// spaces, so a final `"62\t "` row survives.
///
/// ## Returns
/// A `LabelCodecError::Format` error for a line without a tab,
/// or with a code which is not a non-negative integer that fits in `T`.
pub fn parse_tsv_rows<T: CodeType>(text: &str) -> LCResult<Vec<(T, String)>> {
    let text = text.trim_matches(['\n', '\r']);
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.lines()
        .enumerate()
        .map(|(idx, line)| parse_tsv_line(idx + 1, line))
        .collect()
}

fn parse_tsv_line<T: CodeType>(
    lineno: usize,
    line: &str,
) -> LCResult<(T, String)> {
    let (code, rest) = line
        .split_once('\t')
        .ok_or_else(|| LabelCodecError::format(Some(lineno), "missing tab separator"))?;

    let code = parse_code(code).map_err(|msg| LabelCodecError::format(Some(lineno), msg))?;
    let symbol: String = rest.split('\t').collect();

    Ok((code, symbol))
}

/// Parse a decimal code which must fit in `T`.
pub(crate) fn parse_code<T: CodeType>(field: &str) -> Result<T, String> {
    let value: u64 = field
        .trim()
        .parse()
        .map_err(|e| format!("invalid code {field:?}: {e}"))?;
    T::from_u64(value).ok_or_else(|| format!("code {value} is out of range"))
}

/// Build an [`Alphabet`] from TSV text.
pub fn parse_tsv_alphabet<T: CodeType>(
    text: &str,
    options: &AlphabetOptions,
) -> LCResult<Alphabet<T>> {
    Alphabet::from_pairs(parse_tsv_rows::<T>(text)?, options)
}

/// Build an [`Alphabet`] from a TSV reader.
pub fn read_tsv_alphabet<T, R>(
    mut reader: R,
    options: &AlphabetOptions,
) -> LCResult<Alphabet<T>>
where
    T: CodeType,
    R: BufRead,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_tsv_alphabet(&text, options)
}

/// Load an [`Alphabet`] from a TSV file.
///
/// ## Arguments
/// * `path` - the path to the alphabet file.
/// * `options` - mode and blank configuration.
pub fn load_tsv_alphabet_path<T, P>(
    path: P,
    options: &AlphabetOptions,
) -> LCResult<Alphabet<T>>
where
    T: CodeType,
    P: AsRef<Path>,
{
    log::debug!("loading tsv alphabet: {}", path.as_ref().display());
    let reader = BufReader::new(File::open(path)?);
    read_tsv_alphabet(reader, options)
}

/// Write an [`Alphabet`] as TSV; the blank row is omitted.
pub fn write_tsv_alphabet<T, W>(
    alphabet: &Alphabet<T>,
    writer: &mut W,
) -> LCResult<()>
where
    T: CodeType,
    W: Write,
{
    writeln!(writer, "{}", alphabet.to_tsv())?;
    writer.flush()?;
    Ok(())
}

/// Save an [`Alphabet`] to a TSV file.
pub fn save_tsv_alphabet_path<T, P>(
    alphabet: &Alphabet<T>,
    path: P,
) -> LCResult<()>
where
    T: CodeType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_tsv_alphabet(alphabet, &mut writer)
}
