//! Surface lifecycle: bounds sync, event polling, teardown.

use chatty_common::SurfaceId;
use chatty_webview::WebViewEvent;

use crate::app_state::core::ChattyApp;
use crate::app_state::init::viewport_of;

use super::bounds::{sidebar_rect, to_wry_rect};

impl ChattyApp {
    /// Re-apply sidebar and active-surface bounds after a resize.
    pub(in crate::app_state) fn sync_surface_bounds(&self) {
        let (Some(window), Some(registry)) = (&self.window, &self.webviews) else {
            return;
        };

        if let Some(handle) = registry.get(&SurfaceId::Sidebar) {
            let sidebar_width = f64::from(self.config.layout.sidebar_width);
            let bounds = to_wry_rect(&sidebar_rect(viewport_of(window), sidebar_width));
            if let Err(e) = handle.set_bounds(bounds) {
                tracing::warn!(error = %e, "Failed to update sidebar bounds");
            }
        }

        self.show_active_surface();
    }

    /// Drain the inbound queue and handle each event to completion, in
    /// arrival order.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            self.handle_webview_event(event);
        }
    }

    fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::IpcMessage { surface, message } => {
                self.handle_ipc_message(&surface, &message);
            }
            WebViewEvent::NewWindowRequested { surface, url } => {
                self.handle_new_window(&surface, &url);
            }
        }
    }

    /// Destroy every surface.
    pub(in crate::app_state) fn destroy_surfaces(&mut self) {
        if let Some(ref mut registry) = self.webviews {
            let count = registry.destroy_all();
            tracing::info!(count, "Surfaces destroyed");
        }
    }
}
