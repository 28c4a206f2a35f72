//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances as children of the
//! main window, one per surface (the sidebar plus every hosted service).

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Shared inbound queue. Every surface's handlers push here; the shell
/// drains it on the event loop thread.
pub(crate) type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

/// Creates WebViews and owns the event queue they feed.
pub struct WebViewManager {
    pub(crate) events: EventSink,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events, oldest first.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn push(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatty_common::SurfaceId;

    #[test]
    fn drain_returns_events_in_push_order() {
        let manager = WebViewManager::new();
        for n in 0..3 {
            push(
                &manager.events,
                WebViewEvent::NewWindowRequested {
                    surface: SurfaceId::Service("a".into()),
                    url: format!("https://example.com/{n}"),
                },
            );
        }

        let urls: Vec<String> = manager
            .drain_events()
            .into_iter()
            .map(|e| match e {
                WebViewEvent::NewWindowRequested { url, .. } => url,
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert_eq!(
            urls,
            [
                "https://example.com/0",
                "https://example.com/1",
                "https://example.com/2"
            ]
        );
        assert!(manager.drain_events().is_empty());
    }
}
