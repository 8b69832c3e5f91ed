//! Generator context: a configured generator plus any recording session.

use std::path::{Path, PathBuf};

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::observer::AuditLineObserver;
use crate::adapters::recording::{RecordingClock, RecordingObserver};
use crate::adapters::replaying::ReplayingClock;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::generator::UniqueIdGenerator;
use crate::ports::{Clock, ObserverChain};

/// Options shared by every way of building a context.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Node address override; the host-derived default is used when `None`.
    pub node_address: Option<i64>,
    /// Cassette whose recorded clock readings replace the system clock.
    pub replay_clock: Option<PathBuf>,
    /// Echo every generated id to stderr.
    pub audit: bool,
}

/// Owns a configured generator and, when recording, the session its
/// adapters write to.
pub struct GeneratorContext {
    /// The configured generator.
    pub generator: UniqueIdGenerator,
    session: Option<RecordingSession>,
}

impl GeneratorContext {
    /// Creates a context without recording.
    ///
    /// # Errors
    ///
    /// Returns an error if the replay cassette cannot be loaded.
    pub fn live(options: &GeneratorOptions) -> Result<Self, String> {
        let clock = base_clock(options)?;
        let mut observers = ObserverChain::new();
        if options.audit {
            observers.push(AuditLineObserver::stderr());
        }
        Ok(Self {
            generator: build(options, clock, observers),
            session: None,
        })
    }

    /// Creates a context that records clock readings and generated ids to
    /// cassettes under `root`. The cassettes are written by [`Self::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the replay cassette cannot be loaded or the
    /// recording directory cannot be created.
    pub fn recording_at(root: &Path, options: &GeneratorOptions) -> Result<Self, String> {
        let session = RecordingSession::new(root)?;
        let inner = base_clock(options)?;
        let clock = Box::new(RecordingClock::new(inner, session.clock.clone()));
        let mut observers = ObserverChain::new();
        observers.push(RecordingObserver::new(session.ids.clone()));
        if options.audit {
            observers.push(AuditLineObserver::stderr());
        }
        Ok(Self {
            generator: build(options, clock, observers),
            session: Some(session),
        })
    }

    /// Drops the generator and writes any recorded cassettes.
    ///
    /// Returns the cassette directory when recording.
    ///
    /// # Errors
    ///
    /// Returns an error if a cassette cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Self { generator, session } = self;
        // Adapters inside the generator hold recorder references.
        drop(generator);
        session.map(RecordingSession::finish).transpose()
    }
}

fn base_clock(options: &GeneratorOptions) -> Result<Box<dyn Clock>, String> {
    match &options.replay_clock {
        Some(path) => {
            let replayer = CassetteReplayer::from_path(path)?;
            Ok(Box::new(ReplayingClock::new(replayer)))
        }
        None => Ok(Box::new(LiveClock)),
    }
}

fn build(
    options: &GeneratorOptions,
    clock: Box<dyn Clock>,
    observers: ObserverChain,
) -> UniqueIdGenerator {
    let mut builder = UniqueIdGenerator::builder().boxed_clock(clock);
    if let Some(node_address) = options.node_address {
        builder = builder.node_address(node_address);
    }
    if !observers.is_empty() {
        builder = builder.observer(observers);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;
    use crate::id::UniqueId;

    #[test]
    fn live_context_pins_node_address() {
        let options = GeneratorOptions {
            node_address: Some(11),
            ..GeneratorOptions::default()
        };
        let mut ctx = GeneratorContext::live(&options).unwrap();
        assert_eq!(ctx.generator.generate().node_address(), 11);
        assert_eq!(ctx.finish().unwrap(), None);
    }

    #[test]
    fn recorded_run_replays_to_identical_ids() {
        let root = std::env::temp_dir().join("tickid_ctx_record_replay");
        let options = GeneratorOptions {
            node_address: Some(77),
            ..GeneratorOptions::default()
        };

        let mut ctx = GeneratorContext::recording_at(&root, &options).unwrap();
        let recorded: Vec<UniqueId> = (0..5).map(|_| ctx.generator.generate()).collect();
        let dir = ctx.finish().unwrap().expect("recording directory");

        let audit = Cassette::load(&dir.join("ids.cassette.yaml")).unwrap();
        let audited: Vec<UniqueId> = audit
            .interactions
            .iter()
            .map(|i| serde_json::from_value(i.output.clone()).unwrap())
            .collect();
        assert_eq!(audited, recorded);

        let replay = GeneratorOptions {
            replay_clock: Some(dir.join("clock.cassette.yaml")),
            ..options
        };
        let mut ctx = GeneratorContext::live(&replay).unwrap();
        let replayed: Vec<UniqueId> = (0..5).map(|_| ctx.generator.generate()).collect();
        assert_eq!(replayed, recorded);

        let _ = std::fs::remove_dir_all(&root);
    }

    #[test]
    fn missing_replay_cassette_is_an_error() {
        let options = GeneratorOptions {
            replay_clock: Some(PathBuf::from("/nonexistent/clock.cassette.yaml")),
            ..GeneratorOptions::default()
        };
        let err = GeneratorContext::live(&options).err().unwrap();
        assert!(err.contains("Failed to read cassette file"));
    }
}
