use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[arg(long, global = true)]
    pub ts: bool,
}

/// Map a verbosity count onto a log level; 0 turns logging off.
fn log_level(level: u8) -> LogLevelNum {
    match level {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

impl LogArgs {
    /// Install the `stderrlog` logger.
    ///
    /// ## Arguments
    /// * `default` - the verbosity used when no `-v` is given.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let level = if self.verbose > 0 {
            default.saturating_add(self.verbose)
        } else {
            default
        };

        stderrlog::new()
            .module("labelcodec")
            .module("lcodec")
            .quiet(self.quiet)
            .verbosity(log_level(level))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
