mod convert;
mod decode;
mod encode;
mod info;
mod phoc;

/// The default number of lines coded per batch.
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Subcommands for lcodec
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text lines into code lines.
    Encode(encode::EncodeArgs),

    /// Decode code lines into text lines.
    Decode(decode::DecodeArgs),

    /// Compute PHOC vectors of text lines.
    Phoc(phoc::PhocArgs),

    /// Re-serialize an alphabet table.
    Convert(convert::ConvertArgs),

    /// Describe an alphabet table.
    Info(info::InfoArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Phoc(cmd) => cmd.run(),
            Commands::Convert(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
        }
    }
}
