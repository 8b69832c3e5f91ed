//! Command dispatch and handlers.

pub mod generate;
pub mod inspect;
pub mod sort;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// When `TICKID_RECORD` is set to a directory path, `generate` records its
/// clock readings and generated ids to cassettes in that directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Generate {
            count,
            node_address,
            replay_clock,
            audit,
        } => {
            let replay_clock = replay_clock.clone();
            let options = generate::options_from_env(*node_address, replay_clock, *audit)?;
            generate::run(&options, *count)
        }
        Command::Inspect { id } => inspect::run(id),
        Command::Sort => sort::run(),
    }
}
