//! Click handlers registered while a list renders.
//!
//! Widgets don't keep closures inside their elements. Instead each builder
//! registers a [`Handler`] under `(element id, event)` and the host looks it
//! up when the user activates that element. The registry is cleared at the
//! start of every pass so handlers never outlive the snapshot they captured.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A handler closure. Captures everything it needs at registration time.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Event fired when a checkbox or radio row is toggled (click, space, enter).
pub const ON_ACTIVATE: &str = "on_activate";

/// Registry for widget event handlers.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an element event, replacing any previous one.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    /// Get a handler for an element event.
    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    /// Run the handler for `(element_id, event)`.
    ///
    /// Returns false when nothing is registered. The lock is released before
    /// the handler runs, so a handler may trigger a re-render that clears and
    /// repopulates this registry.
    pub fn dispatch(&self, element_id: &str, event: &str) -> bool {
        match self.get(element_id, event) {
            Some(handler) => {
                log::trace!("dispatch {event} on {element_id}");
                handler();
                true
            }
            None => false,
        }
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers
            .read()
            .map(|h| h.is_empty())
            .unwrap_or(true)
    }

    /// Get the number of registered handlers.
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

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_dispatch_runs_registered_handler() {
        let registry = HandlerRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        registry.register(
            "row-1",
            ON_ACTIVATE,
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        assert!(registry.dispatch("row-1", ON_ACTIVATE));
        assert!(!registry.dispatch("row-2", ON_ACTIVATE));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_may_clear_registry() {
        let registry = HandlerRegistry::new();
        let inner = registry.clone();
        registry.register("row", ON_ACTIVATE, Arc::new(move || inner.clear()));

        assert!(registry.dispatch("row", ON_ACTIVATE));
        assert!(registry.is_empty());
    }
}
