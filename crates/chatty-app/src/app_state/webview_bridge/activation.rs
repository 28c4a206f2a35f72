//! `openClient`: switch the active view.

use chatty_common::{ServiceId, SurfaceId};
use chatty_webview::SidebarUpdate;

use crate::app_state::core::ChattyApp;
use crate::app_state::init::viewport_of;

use super::bounds::{content_rect, to_wry_rect};

impl ChattyApp {
    /// Make `id` the active view. Unknown ids are ignored with a warning.
    pub(in crate::app_state) fn open_client(&mut self, id: &ServiceId) {
        let activation = match self.state.open_client(id) {
            Ok(activation) => activation,
            Err(e) => {
                tracing::warn!(service = %id, "openClient ignored: {e}");
                return;
            }
        };

        tracing::info!(
            service = %activation.active,
            previous = %activation.previous,
            "Active view changed"
        );
        self.show_active_surface();
        self.send_to_sidebar(&SidebarUpdate::ActiveView(activation.active));
    }

    /// Hide every hosted surface except the active one, which is sized to
    /// the content area and shown.
    pub(in crate::app_state) fn show_active_surface(&self) {
        let (Some(window), Some(registry)) = (&self.window, &self.webviews) else {
            return;
        };

        let active = SurfaceId::Service(self.state.active().clone());
        for id in self.state.services() {
            let surface = SurfaceId::Service(id.clone());
            if surface == active {
                continue;
            }
            if let Some(handle) = registry.get(&surface) {
                if let Err(e) = handle.set_visible(false) {
                    tracing::warn!(%surface, error = %e, "Failed to hide surface");
                }
            }
        }

        let Some(handle) = registry.get(&active) else {
            tracing::warn!(surface = %active, "Active service has no surface");
            return;
        };
        let sidebar_width = f64::from(self.config.layout.sidebar_width);
        let bounds = to_wry_rect(&content_rect(viewport_of(window), sidebar_width));
        if let Err(e) = handle.set_bounds(bounds) {
            tracing::warn!(surface = %active, error = %e, "Failed to update surface bounds");
        }
        if let Err(e) = handle.set_visible(true) {
            tracing::warn!(surface = %active, error = %e, "Failed to show surface");
        }
        if let Err(e) = handle.focus() {
            tracing::debug!(surface = %active, error = %e, "Failed to focus surface");
        }
    }

    /// Apply an update inside the sidebar page. Dropped silently before
    /// the sidebar exists; `sidebar_ready` replays the full state.
    pub(in crate::app_state) fn send_to_sidebar(&self, update: &SidebarUpdate) {
        let Some(handle) = self
            .webviews
            .as_ref()
            .and_then(|registry| registry.get(&SurfaceId::Sidebar))
        else {
            return;
        };
        if let Err(e) = handle.evaluate_script(&update.to_script()) {
            tracing::warn!(kind = update.kind(), error = %e, "Failed to update sidebar");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
