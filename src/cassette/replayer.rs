//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};
use std::path::Path;

use super::format::{Cassette, Interaction};

/// Pending interactions for one port/method pair.
#[derive(Debug, Default)]
struct Stream {
    pending: VecDeque<Interaction>,
    consumed: usize,
    last_seq: Option<u64>,
}

/// Serves a cassette's interactions back in recorded order, with an
/// independent cursor per `port::method` pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    streams: HashMap<(String, String), Stream>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut streams: HashMap<(String, String), Stream> = HashMap::new();
        for interaction in &cassette.interactions {
            streams
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .pending
                .push_back(interaction.clone());
        }
        Self { streams }
    }

    /// Load a cassette file and create a replayer over it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        Cassette::load(path).map(|cassette| Self::new(&cassette))
    }

    /// Number of interactions not yet served for the given port and method.
    #[cfg(test)]
    fn remaining(&self, port: &str, method: &str) -> usize {
        self.streams
            .get(&(port.to_string(), method.to_string()))
            .map_or(0, |stream| stream.pending.len())
    }

    /// Take the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// port/method pair. The message names what was requested and what the
    /// cassette holds.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        let Some(stream) = self.streams.get_mut(&key) else {
            let mut available: Vec<String> = self
                .streams
                .keys()
                .map(|(p, m)| format!("{p}::{m}"))
                .collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };

        let Some(interaction) = stream.pending.pop_front() else {
            panic!(
                "Cassette exhausted: all {count} interactions for port={port:?} method={method:?} \
                 have been consumed. Last interaction was seq={last_seq}.",
                count = stream.consumed,
                last_seq = stream.last_seq.unwrap_or(0),
            );
        };
        stream.consumed += 1;
        stream.last_seq = Some(interaction.seq);
        interaction
    }
}
