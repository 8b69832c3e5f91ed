//! Observer port notified of every generated id.

use crate::id::UniqueId;

/// A callback invoked for every id a generator produces.
///
/// Called synchronously, once per id, in generation order. A panicking
/// observer unwinds through `generate` untouched.
pub trait Observer: Send {
    /// Receives an id that was just generated.
    fn id_generated(&mut self, id: &UniqueId);
}

impl<F> Observer for F
where
    F: FnMut(&UniqueId) + Send,
{
    fn id_generated(&mut self, id: &UniqueId) {
        self(id);
    }
}

/// Forwards each id to several observers, in registration order.
#[derive(Default)]
pub struct ObserverChain {
    observers: Vec<Box<dyn Observer>>,
}

impl ObserverChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer to the chain.
    pub fn push(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl Observer for ObserverChain {
    fn id_generated(&mut self, id: &UniqueId) {
        for observer in &mut self.observers {
            observer.id_generated(id);
        }
    }
}
