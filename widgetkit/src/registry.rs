//! Handler registry for widget callbacks.
//!
//! Widgets register closures keyed by `(element_id, event_name)` while
//! building; [`dispatch`](crate::dispatch) looks them up when an event
//! arrives. Hosts clear the registry before every render so that only the
//! handlers of the current tree stay reachable.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use widgetdom::Event;

/// Event name under which activation handlers are registered.
pub const ON_ACTIVATE: &str = "on_activate";

/// A handler closure receiving the event that triggered it.
pub type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Registry for widget event handlers.
///
/// Cloning is cheap and clones share the same map.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Whether a handler exists for an element event.
    pub fn contains(&self, element_id: &str, event: &str) -> bool {
        self.get(element_id, event).is_some()
    }

    /// Remove all handlers. Called before each render.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().map(|h| h.is_empty()).unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}
