//! Live adapters for real external interactions.

pub mod clock;
pub mod hardware;
pub mod observer;
