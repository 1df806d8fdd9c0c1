use std::io::{BufRead, Write};

use labelcodec::PhocPyramid;

use crate::{
    alphabet_selector::AlphabetArgs,
    input_output::{InputArgs, OutputArgs, write_joined},
};

/// Args for the phoc command.
#[derive(clap::Args, Debug)]
pub struct PhocArgs {
    #[command(flatten)]
    alphabet: AlphabetArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Comma separated pyramid levels.
    #[arg(long, default_value = "1,2,3,4,5")]
    levels: PhocPyramid,
}

impl PhocArgs {
    /// Run the phoc command.
    ///
    /// Every input line becomes one line of space-separated histogram values.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let alphabet = self.alphabet.load_alphabet()?;
        log::info!(
            "phoc levels {:?}: {} values per line",
            self.levels.levels(),
            self.levels.histogram_len(alphabet.len())
        );

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for line in reader.lines() {
            let phoc = alphabet.phoc(&line?, &self.levels);
            write_joined(&mut writer, phoc)?;
        }

        writer.flush()?;
        Ok(())
    }
}
