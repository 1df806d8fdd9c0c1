use std::io::Write;

use labelcodec::{LabelEncoder, rayon::ParallelRayonEncoder};

use crate::{
    alphabet_selector::AlphabetArgs,
    commands::DEFAULT_BATCH_SIZE,
    input_output::{InputArgs, OutputArgs, for_each_line_chunk, write_joined},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    alphabet: AlphabetArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Lines encoded per parallel batch.
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
}

impl EncodeArgs {
    /// Run the encode command.
    ///
    /// Every input line becomes one line of space-separated codes.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let encoder = ParallelRayonEncoder::new(self.alphabet.load_alphabet()?);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for_each_line_chunk(&mut reader, self.batch_size, |_, lines| {
            let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
            let batch = encoder.encode_batch(&lines);
            for codes in batch.sequences() {
                write_joined(&mut writer, codes)?;
            }
            Ok(())
        })?;

        writer.flush()?;
        Ok(())
    }
}
