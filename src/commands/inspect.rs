//! `tickid inspect` command.

use chrono::SecondsFormat;

use crate::id::UniqueId;

/// Execute the `inspect` command.
///
/// # Errors
///
/// Returns an error string if `id` is not a valid id.
pub fn run(id: &str) -> Result<(), String> {
    let id: UniqueId = id.parse().map_err(|e| format!("Invalid id {id:?}: {e}"))?;
    print!("{}", describe(&id));
    Ok(())
}

/// Render an id's fields, one per line.
#[must_use]
pub fn describe(id: &UniqueId) -> String {
    let instant = id.instant().map_or_else(
        || "out of range".to_string(),
        |t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    );
    format!(
        "Id: {id}\nTimestamp: {}\nInstant: {instant}\nNode address: {}\nSequence: {}\n",
        id.timestamp(),
        id.node_address(),
        id.sequence(),
    )
}
