//! Recording observer: an audit trail of generated ids.

use std::sync::{Arc, Mutex};

use super::record_interaction;
use crate::cassette::recorder::CassetteRecorder;
use crate::id::UniqueId;
use crate::ports::Observer;

/// Cassette port name for generated ids.
pub const PORT: &str = "ids";

/// Records each generated id (in text form) to a cassette.
pub struct RecordingObserver {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingObserver {
    /// Creates an observer appending to the given recorder.
    pub fn new(recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { recorder }
    }
}

impl Observer for RecordingObserver {
    fn id_generated(&mut self, id: &UniqueId) {
        record_interaction(&self.recorder, PORT, "generated", &(), id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;
    use crate::generator::UniqueIdGenerator;

    #[test]
    fn audit_cassette_lists_ids_in_generation_order() {
        let dir = std::env::temp_dir().join("tickid_rec_observer_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ids.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test", "abc")));

        let ids = {
            let mut generator = UniqueIdGenerator::builder()
                .node_address(9)
                .observer(RecordingObserver::new(Arc::clone(&recorder)))
                .build();
            (0..3).map(|_| generator.generate()).collect::<Vec<_>>()
        };

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        let recorded: Vec<UniqueId> = cassette
            .interactions
            .iter()
            .map(|i| serde_json::from_value(i.output.clone()).unwrap())
            .collect();
        assert_eq!(recorded, ids);
        assert!(cassette.interactions.iter().all(|i| i.port == "ids"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
