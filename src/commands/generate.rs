//! `tickid generate` command.

use std::env;
use std::io::Write;
use std::path::PathBuf;

use crate::context::{GeneratorContext, GeneratorOptions};
use crate::generator::UniqueIdGenerator;

/// Environment variable holding the default node address.
pub const NODE_ADDRESS_VAR: &str = "TICKID_NODE_ADDRESS";

/// Environment variable naming the directory to record cassettes into.
pub const RECORD_VAR: &str = "TICKID_RECORD";

/// Build generator options from flags, falling back to `TICKID_NODE_ADDRESS`
/// when no node address flag was given.
///
/// # Errors
///
/// Returns an error string if the environment variable is not an integer.
pub fn options_from_env(
    node_address: Option<i64>,
    replay_clock: Option<PathBuf>,
    audit: bool,
) -> Result<GeneratorOptions, String> {
    let node_address = match node_address {
        Some(address) => Some(address),
        None => env::var(NODE_ADDRESS_VAR)
            .ok()
            .map(|v| parse_node_address(&v))
            .transpose()?,
    };
    Ok(GeneratorOptions {
        node_address,
        replay_clock,
        audit,
    })
}

fn parse_node_address(value: &str) -> Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|e| format!("Invalid {NODE_ADDRESS_VAR} {value:?}: {e}"))
}

/// Execute the `generate` command, printing `count` ids to stdout.
///
/// # Errors
///
/// Returns an error string if the context cannot be built, stdout cannot be
/// written, or recorded cassettes cannot be saved.
pub fn run(options: &GeneratorOptions, count: usize) -> Result<(), String> {
    let mut ctx = match env::var(RECORD_VAR) {
        Ok(dir) => GeneratorContext::recording_at(&PathBuf::from(dir), options)?,
        Err(_) => GeneratorContext::live(options)?,
    };

    let stdout = std::io::stdout();
    let result = write_ids(&mut ctx.generator, count, &mut stdout.lock());

    // Save the recording even if writing failed part-way.
    if let Some(dir) = ctx.finish()? {
        tracing::info!(dir = %dir.display(), "recording saved");
        eprintln!("Recording saved to: {}", dir.display());
    }
    result
}

/// Generate `count` ids and write them one per line.
///
/// # Errors
///
/// Returns an error string if `out` cannot be written.
pub fn write_ids(
    generator: &mut UniqueIdGenerator,
    count: usize,
    out: &mut impl Write,
) -> Result<(), String> {
    for _ in 0..count {
        let id = generator.generate();
        if let Err(e) = writeln!(out, "{id}") {
            return Err(format!("Failed to write id: {e}"));
        }
    }
    Ok(())
}
