//! Replaying adapters that replay recorded interactions.

pub mod clock;

pub use clock::ReplayingClock;
