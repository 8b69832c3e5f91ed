//! The unique id generator.
//!
//! Ids roughly follow the UUID v1 template: hundreds of nanoseconds since the
//! Unix epoch, a node address, and a sequence number that counts calls within
//! the same tick.
//!
//! Each generator is pinned to one node address. Ids are unique within a
//! single generator; two generators sharing a node address can collide.
//! Generation takes `&mut self`, so sharing a generator across threads needs
//! external synchronization such as a `Mutex`.

use chrono::{DateTime, Utc};

use crate::adapters::live::clock::LiveClock;
use crate::id::{UniqueId, NANOS_PER_TICK, TICKS_PER_SECOND};
use crate::node::resolve_default_node_address;
use crate::ports::{Clock, Observer};

/// Stateful generator of [`UniqueId`]s.
pub struct UniqueIdGenerator {
    node_address: i64,
    clock: Box<dyn Clock>,
    observer: Option<Box<dyn Observer>>,
    /// Tick of the most recent id; the sequence resets when it changes.
    last_timestamp: i64,
    sequence: u32,
}

impl UniqueIdGenerator {
    /// Creates a generator with the system clock, the host-derived node
    /// address, and no observer.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a generator.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    /// The node address stamped on every id from this generator.
    #[must_use]
    pub fn node_address(&self) -> i64 {
        self.node_address
    }

    /// Generates a new id, unique within this generator.
    ///
    /// Notifies the observer, if any, before returning. Never panics on its
    /// own: the sequence wraps to 0 after `u32::MAX` calls within one tick.
    pub fn generate(&mut self) -> UniqueId {
        let timestamp = to_ticks(self.clock.now());
        if timestamp == self.last_timestamp {
            self.sequence = self.sequence.wrapping_add(1);
        } else {
            self.sequence = 0;
        }
        self.last_timestamp = timestamp;

        let id = UniqueId::new(timestamp, self.node_address, self.sequence);
        tracing::trace!(%id, "generated id");
        if let Some(observer) = self.observer.as_mut() {
            observer.id_generated(&id);
        }
        id
    }
}

impl Default for UniqueIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts an instant to 100ns ticks since the epoch. Sub-tick nanoseconds
/// are truncated.
///
/// Instants past roughly the year 31,000 do not fit in an `i64` tick count;
/// the arithmetic wraps like a 64-bit two's complement integer.
#[must_use]
pub fn to_ticks(instant: DateTime<Utc>) -> i64 {
    let sub_ticks = i64::from(instant.timestamp_subsec_nanos() / NANOS_PER_TICK);
    instant
        .timestamp()
        .wrapping_mul(TICKS_PER_SECOND)
        .wrapping_add(sub_ticks)
}

/// Builder for [`UniqueIdGenerator`]. Every option is independent.
#[derive(Default)]
pub struct GeneratorBuilder {
    node_address: Option<i64>,
    clock: Option<Box<dyn Clock>>,
    observer: Option<Box<dyn Observer>>,
}

impl GeneratorBuilder {
    /// Pins the node address instead of deriving it from the host.
    #[must_use]
    pub fn node_address(mut self, node_address: i64) -> Self {
        self.node_address = Some(node_address);
        self
    }

    /// Substitutes the time source.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Substitutes an already boxed time source.
    #[must_use]
    pub fn boxed_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Registers an observer invoked with every generated id.
    #[must_use]
    pub fn observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Builds the generator, resolving defaults for unset options.
    #[must_use]
    pub fn build(self) -> UniqueIdGenerator {
        UniqueIdGenerator {
            node_address: self
                .node_address
                .unwrap_or_else(resolve_default_node_address),
            clock: self.clock.unwrap_or_else(|| Box::new(LiveClock)),
            observer: self.observer,
            last_timestamp: 0,
            sequence: 0,
        }
    }
}
