//! `tickid sort` command.

use std::io::BufRead;

use crate::id::UniqueId;

/// Execute the `sort` command: read ids from stdin, print them in order.
///
/// # Errors
///
/// Returns an error string if stdin cannot be read or a line is not an id.
pub fn run() -> Result<(), String> {
    let ids = read_sorted(std::io::stdin().lock())?;
    for id in &ids {
        println!("{id}");
    }
    Ok(())
}

/// Parse one id per line and return them sorted. Blank lines are skipped.
///
/// # Errors
///
/// Returns an error string naming the first line that fails to read or parse.
pub fn read_sorted(input: impl BufRead) -> Result<Vec<UniqueId>, String> {
    let mut ids = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let number = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) => return Err(format!("Failed to read line {number}: {e}")),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let id = match line.parse::<UniqueId>() {
            Ok(id) => id,
            Err(e) => return Err(format!("Line {number}: invalid id {line:?}: {e}")),
        };
        ids.push(id);
    }
    ids.sort_unstable();
    Ok(ids)
}
