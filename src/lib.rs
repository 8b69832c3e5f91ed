//! Time-ordered unique identifiers.
//!
//! A [`UniqueIdGenerator`] stamps each [`UniqueId`] with the current time in
//! 100ns ticks, its node address, and a sequence number that counts calls
//! within the same tick. Ids from one generator never repeat and sort in
//! generation order.
//!
//! ```
//! use tickid::{UniqueId, UniqueIdGenerator};
//!
//! let mut generator = UniqueIdGenerator::builder().node_address(42).build();
//! let first = generator.generate();
//! let second = generator.generate();
//! assert!(first < second);
//! assert_eq!(UniqueId::new(1, 2, 3).to_string(), "1-2-3");
//! ```

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod generator;
pub mod id;
pub mod node;
pub mod ports;

pub use generator::{GeneratorBuilder, UniqueIdGenerator};
pub use id::{ParseIdError, UniqueId};
pub use ports::{Clock, Observer};

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => return Err(err.to_string()),
        },
    };
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_inspects_id() {
        assert!(run(["tickid", "inspect", "1-2-3"]).is_ok());
    }

    #[test]
    fn run_treats_help_as_success() {
        assert!(run(["tickid", "--help"]).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        assert!(run(["tickid", "unknown"]).is_err());
    }
}
