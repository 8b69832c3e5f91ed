//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generator core and the
//! outside world (time, host hardware, id consumers). Implementations live
//! in `src/adapters/`.

pub mod clock;
pub mod hardware;
pub mod observer;

pub use clock::Clock;
pub use hardware::{HardwareAddressSource, NodeAddressError};
pub use observer::{Observer, ObserverChain};
