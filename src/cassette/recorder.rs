//! Records interactions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Accumulates interactions in memory and writes them as a YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    commit: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            commit: commit.into(),
            interactions: Vec::new(),
        }
    }

    /// Record an interaction. `seq` is its position in the cassette.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
    }

    /// Finish recording and write the cassette YAML file, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            commit: self.commit,
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette)
            .map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        tracing::debug!(
            path = %self.path.display(),
            count = cassette.interactions.len(),
            "wrote cassette"
        );
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_assigns_sequence_and_finish_writes_yaml() {
        let dir = std::env::temp_dir().join("tickid_cassette_recorder_test");
        let path = dir.join("nested").join("ids.cassette.yaml");
        let first = json!("17420492000000000-42-0");
        let second = json!("17420492000000000-42-1");

        let mut recorder = CassetteRecorder::new(&path, "audit", "deadbeef");
        recorder.record("clock", "now", json!(null), json!("2025-03-15T14:30:00Z"));
        recorder.record("ids", "generated", json!(null), first);
        recorder.record("ids", "generated", json!(null), second.clone());

        let result_path = recorder.finish().expect("finish should succeed");
        assert_eq!(result_path, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();

        assert_eq!(cassette.name, "audit");
        assert_eq!(cassette.commit, "deadbeef");
        let seqs: Vec<u64> = cassette.interactions.iter().map(|i| i.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_eq!(cassette.interactions[0].port, "clock");
        assert_eq!(cassette.interactions[2].output, second);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
