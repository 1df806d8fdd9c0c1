use std::io::Write;

use labelcodec::Alphabet;

use crate::{alphabet_selector::AlphabetArgs, input_output::OutputArgs};

/// Args for the info command.
#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    alphabet: AlphabetArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Write a `key: value` description of an alphabet.
pub fn write_info(
    alphabet: &Alphabet<u32>,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(writer, "mode: {}", alphabet.mode())?;
    writeln!(writer, "len: {}", alphabet.len())?;
    writeln!(writer, "symbols: {}", alphabet.num_symbols())?;
    match (alphabet.blank_code(), alphabet.blank_symbol()) {
        (Some(code), Some(symbol)) => writeln!(writer, "blank: {code} {symbol}")?,
        _ => writeln!(writer, "blank: none")?,
    }
    let default_code = alphabet.default_code();
    writeln!(
        writer,
        "default code: {default_code} {}",
        alphabet.symbol_or_default(default_code)
    )?;
    writeln!(writer, "default symbol: {}", alphabet.default_symbol())
}

impl InfoArgs {
    /// Run the info command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let alphabet = self.alphabet.load_alphabet()?;
        let mut writer = self.output.open_writer()?;

        write_info(&alphabet, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use labelcodec::pretrained::letters;

    use super::*;

    #[test]
    fn test_write_info() {
        let alphabet = letters().unwrap();
        let mut buf: Vec<u8> = Vec::new();
        write_info(&alphabet, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "mode: character\nlen: 54\nsymbols: 54\nblank: 53 \u{2205}\n\
             default code: 52 Z\ndefault symbol: .\n"
        );
    }
}
