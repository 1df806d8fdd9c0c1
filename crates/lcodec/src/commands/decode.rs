use std::io::Write;

use labelcodec::{CodeBatch, LabelDecoder, rayon::ParallelRayonDecoder};

use crate::{
    alphabet_selector::AlphabetArgs,
    commands::DEFAULT_BATCH_SIZE,
    input_output::{InputArgs, OutputArgs, for_each_line_chunk},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    alphabet: AlphabetArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Collapse repeats and drop blanks (CTC decoding).
    #[arg(long)]
    ctc: bool,

    /// The code dropped by CTC decoding; defaults to the blank code.
    #[arg(long, requires = "ctc")]
    null: Option<u32>,

    /// Lines decoded per parallel batch.
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
}

/// Parse a line of whitespace-separated codes.
///
/// ## Arguments
/// * `lineno` - the 1-based line number, for error messages.
/// * `line` - the line to parse.
pub fn parse_code_line(
    lineno: usize,
    line: &str,
) -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    line.split_whitespace()
        .map(|field| {
            field
                .parse::<u32>()
                .map_err(|e| {
                    Box::<dyn std::error::Error>::from(format!(
                        "line {lineno}: invalid code {field:?}: {e}"
                    ))
                })
        })
        .collect()
}

impl DecodeArgs {
    /// Run the decode command.
    ///
    /// Every input line of codes becomes one line of text.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let decoder = ParallelRayonDecoder::new(self.alphabet.load_alphabet()?);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for_each_line_chunk(&mut reader, self.batch_size, |first_line, lines| {
            let rows = lines
                .iter()
                .enumerate()
                .map(|(idx, line)| parse_code_line(first_line + idx, line))
                .collect::<Result<Vec<_>, _>>()?;
            let batch = CodeBatch::from_rows(&rows);

            let texts = if self.ctc {
                decoder.decode_ctc_batch(&batch, self.null)
            } else {
                decoder.decode_batch(&batch)
            };
            for text in texts {
                writeln!(writer, "{text}")?;
            }
            Ok(())
        })?;

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_code_line() {
        assert_eq!(parse_code_line(1, " 3 1  2 ").unwrap(), vec![3, 1, 2]);
        assert!(parse_code_line(1, "").unwrap().is_empty());

        let err = parse_code_line(7, "1 x").unwrap_err();
        assert!(err.to_string().contains("line 7"));
        assert!(parse_code_line(1, "-1").is_err());
    }
}
