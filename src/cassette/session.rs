//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;
use crate::adapters::recording::{clock, observer};

/// Owns the recorders of one recording run: one for clock readings and one
/// for the audit trail of generated ids.
///
/// Cassettes are written to a timestamped directory under the session root.
pub struct RecordingSession {
    /// Recorder for clock readings.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for generated ids.
    pub ids: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a session writing to `<root>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cassette directory already exists
    /// - The directory cannot be created
    pub fn new(root: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            return Err(format!(
                "Cassette directory already exists: {}",
                output_dir.display()
            ));
        }

        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let commit = get_commit_hash();

        let make_recorder = |port: &str| -> Arc<Mutex<CassetteRecorder>> {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            let name = format!("{timestamp}-{port}");
            Arc::new(Mutex::new(CassetteRecorder::new(path, &name, &commit)))
        };

        Ok(Self {
            clock: make_recorder(clock::PORT),
            ids: make_recorder(observer::PORT),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[cfg(test)]
    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish both recorders and write their cassette files.
    ///
    /// Every adapter holding a recorder must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("{port} recorder still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder
                .finish()
                .map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.clock, clock::PORT)?;
        finish_one(self.ids, observer::PORT)?;

        Ok(self.output_dir)
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    hash.unwrap_or_else(|| {
        tracing::warn!("could not read git commit hash, using 'unknown'");
        "unknown".to_string()
    })
}
