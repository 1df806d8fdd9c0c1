//! # JSON Alphabet IO
//!
//! A single object of stringified codes to symbols:
//! ```json
//! {"0": "a", "1": "b"}
//! ```

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde_json::{Map, Value};

use crate::{
    LCResult,
    LabelCodecError,
    alphabet::{Alphabet, AlphabetOptions, io::tsv_io::parse_code},
    types::CodeType,
};

fn json_format_error(err: serde_json::Error) -> LabelCodecError {
    let line = if err.line() > 0 { Some(err.line()) } else { None };
    LabelCodecError::format(line, err.to_string())
}

/// Convert a parsed JSON value into `(code, symbol)` rows, in ascending code order.
pub fn json_value_rows<T: CodeType>(value: &Value) -> LCResult<Vec<(T, String)>> {
    let object = value
        .as_object()
        .ok_or_else(|| LabelCodecError::format(None, "expected a JSON object"))?;

    let mut rows = object
        .iter()
        .map(|(key, value)| {
            let code = parse_code::<T>(key).map_err(|msg| LabelCodecError::format(None, msg))?;
            let symbol = value.as_str().ok_or_else(|| {
                LabelCodecError::format(None, format!("symbol for code {key:?} is not a string"))
            })?;
            Ok((code, symbol.to_string()))
        })
        .collect::<LCResult<Vec<(T, String)>>>()?;

    rows.sort_by_key(|(code, _)| *code);
    Ok(rows)
}

/// Parse JSON text into `(code, symbol)` rows, in ascending code order.
pub fn parse_json_rows<T: CodeType>(text: &str) -> LCResult<Vec<(T, String)>> {
    let value: Value = serde_json::from_str(text).map_err(json_format_error)?;
    json_value_rows(&value)
}

/// Build an [`Alphabet`] from JSON text.
pub fn parse_json_alphabet<T: CodeType>(
    text: &str,
    options: &AlphabetOptions,
) -> LCResult<Alphabet<T>> {
    Alphabet::from_pairs(parse_json_rows::<T>(text)?, options)
}

/// Build an [`Alphabet`] from a JSON reader.
pub fn read_json_alphabet<T, R>(
    reader: R,
    options: &AlphabetOptions,
) -> LCResult<Alphabet<T>>
where
    T: CodeType,
    R: Read,
{
    let value: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            LabelCodecError::Io(e.into())
        } else {
            json_format_error(e)
        }
    })?;
    Alphabet::from_pairs(json_value_rows::<T>(&value)?, options)
}

/// Load an [`Alphabet`] from a JSON file.
pub fn load_json_alphabet_path<T, P>(
    path: P,
    options: &AlphabetOptions,
) -> LCResult<Alphabet<T>>
where
    T: CodeType,
    P: AsRef<Path>,
{
    log::debug!("loading json alphabet: {}", path.as_ref().display());
    let reader = BufReader::new(File::open(path)?);
    read_json_alphabet(reader, options)
}

/// Serialize an [`Alphabet`] as a JSON object; the blank row is omitted.
pub fn alphabet_to_json_value<T: CodeType>(alphabet: &Alphabet<T>) -> Value {
    let object: Map<String, Value> = alphabet
        .sorted_rows(false)
        .into_iter()
        .map(|(code, symbol)| (code.to_string(), Value::String(symbol.to_string())))
        .collect();
    Value::Object(object)
}

/// Write an [`Alphabet`] as pretty JSON; the blank row is omitted.
pub fn write_json_alphabet<T, W>(
    alphabet: &Alphabet<T>,
    writer: &mut W,
) -> LCResult<()>
where
    T: CodeType,
    W: Write,
{
    serde_json::to_writer_pretty(&mut *writer, &alphabet_to_json_value(alphabet))
        .map_err(|e| LabelCodecError::Io(e.into()))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Save an [`Alphabet`] to a JSON file.
pub fn save_json_alphabet_path<T, P>(
    alphabet: &Alphabet<T>,
    path: P,
) -> LCResult<()>
where
    T: CodeType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_alphabet(alphabet, &mut writer)
}
