mod alphabet_selector;
mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;
use logging::LogArgs;

/// lcodec: encode, decode, and embed sequence labels.
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    logging: LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_decode() {
        let args = Args::try_parse_from(["lcodec", "-vv", "decode", "--ctc", "--null", "0"]).unwrap();
        assert!(matches!(args.command, Commands::Decode(_)));
    }
}
