//! Cassettes: YAML files of recorded port interactions, used to keep clock
//! readings and an audit trail of generated ids.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
