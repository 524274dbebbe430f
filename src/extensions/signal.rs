use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Handle returned by [`Signal::tap`], used to remove the handler again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

type Handler<T> = Box<dyn FnMut(&T)>;

/// Single-argument publish/subscribe channel.
///
/// Handlers run synchronously inside [`Signal::raise`] in registration order.
pub struct Signal<T> {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler<T>)>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
        }
    }
}

impl<T> Signal<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tap<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a handler. Returns `false` when `id` is not registered.
    pub fn untap(&mut self, id: SubscriptionId) -> bool {
        if let Some(position) = self.handlers.iter().position(|(entry, _)| *entry == id) {
            self.handlers.remove(position);
            return true;
        }
        false
    }

    pub fn raise(&mut self, value: &T) {
        trace!(handlers = self.handlers.len(), "signal raised");
        for (_, handler) in &mut self.handlers {
            handler(value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
