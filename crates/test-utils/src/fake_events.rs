use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use dashbling_config::config::{ActionRegistry, SendEvent};
use tracing::debug;

/// A fake event sink that records every `(id, data)` pair it receives.
#[derive(Debug, Default)]
pub struct RecordingEvents {
    sent: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(String, serde_json::Value)> {
        self.sent.lock().unwrap().clone()
    }
}

impl SendEvent for RecordingEvents {
    fn send_event(&self, id: &str, data: serde_json::Value) {
        debug!(id, "fake event sent");
        self.sent.lock().unwrap().push((id.to_string(), data));
    }
}

/// Registry with counting actions and a hook that emits one event.
///
/// - actions: `refresh`, `cleanup`
/// - hooks: `seed` (sends `("seed", {"ok": true})`)
pub struct CountingRegistry {
    pub registry: ActionRegistry,
    pub refresh_calls: Arc<AtomicUsize>,
    pub cleanup_calls: Arc<AtomicUsize>,
}

impl CountingRegistry {
    pub fn new() -> Self {
        let refresh_calls = Arc::new(AtomicUsize::new(0));
        let cleanup_calls = Arc::new(AtomicUsize::new(0));

        let refresh = Arc::clone(&refresh_calls);
        let cleanup = Arc::clone(&cleanup_calls);
        let registry = ActionRegistry::new()
            .with_action("refresh", move || {
                refresh.fetch_add(1, Ordering::SeqCst);
            })
            .with_action("cleanup", move || {
                cleanup.fetch_add(1, Ordering::SeqCst);
            })
            .with_hook("seed", |events| {
                events.send_event("seed", serde_json::json!({ "ok": true }));
            });

        Self {
            registry,
            refresh_calls,
            cleanup_calls,
        }
    }

    pub fn refresh_count(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn cleanup_count(&self) -> usize {
        self.cleanup_calls.load(Ordering::SeqCst)
    }
}

impl Default for CountingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
