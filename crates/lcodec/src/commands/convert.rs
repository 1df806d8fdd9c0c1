use labelcodec::alphabet::io::TableFormat;

use crate::{alphabet_selector::AlphabetArgs, input_output::OutputArgs};

/// Args for the convert command.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    alphabet: AlphabetArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// The output table format.
    #[arg(long, default_value_t = TableFormat::Tsv)]
    to: TableFormat,
}

impl ConvertArgs {
    /// Run the convert command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let alphabet = self.alphabet.load_alphabet()?;
        let mut writer = self.output.open_writer()?;

        self.to.write_alphabet(alphabet.as_ref(), &mut writer)?;
        Ok(())
    }
}
