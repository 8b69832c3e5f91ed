//! Recording adapters that capture interactions to cassettes.

pub mod clock;
pub mod observer;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use clock::RecordingClock;
pub use observer::RecordingObserver;

/// Record one interaction on the shared recorder.
///
/// Mirror of `CassetteReplayer::next_interaction`: writes the input/output
/// pair a replaying adapter later reads back.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input)
        .expect("failed to serialize recording input");
    let output_json = serde_json::to_value(output)
        .expect("failed to serialize recording output");

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}
