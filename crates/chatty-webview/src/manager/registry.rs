use std::collections::HashMap;

use chatty_common::{Result, SurfaceId};
use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Maps surfaces to their WebView handles. Owns the manager and with it
/// the inbound event queue.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<SurfaceId, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a WebView for a surface and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        surface: SurfaceId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<()> {
        let handle = self.manager.create(surface.clone(), window, bounds, config)?;
        self.handles.insert(surface, handle);
        Ok(())
    }

    pub fn get(&self, surface: &SurfaceId) -> Option<&WebViewHandle> {
        self.handles.get(surface)
    }

    /// Drain all pending events from all WebViews.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all WebViews. Used during shutdown. Returns how many were
    /// live.
    pub fn destroy_all(&mut self) -> usize {
        let count = self.handles.len();
        for (surface, _handle) in self.handles.drain() {
            debug!(%surface, "WebView destroyed");
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry() {
        let mut registry = WebViewRegistry::new(WebViewManager::new());
        assert!(registry.get(&SurfaceId::Sidebar).is_none());
        assert_eq!(registry.destroy_all(), 0);
        assert!(registry.drain_events().is_empty());
    }
}
