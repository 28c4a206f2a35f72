//! Window creation and webview surface setup.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use chatty_common::{Rect, SurfaceId};
use chatty_webview::scripts::{build_count_script, build_notification_shim};
use chatty_webview::sidebar::sidebar_html;
use chatty_webview::{SidebarEntry, WebViewConfig, WebViewManager, WebViewRegistry};

use super::core::ChattyApp;
use super::title::WindowTitleBadge;
use super::types::FALLBACK_WINDOW_SIDE;
use super::webview_bridge::{content_rect, sidebar_rect, to_wry_rect};

/// Side of the square main window: `scale` of the monitor's shorter
/// logical dimension.
pub(super) fn initial_window_side(monitor: Option<LogicalSize<f64>>, scale: f64) -> f64 {
    match monitor {
        Some(size) if size.width > 0.0 && size.height > 0.0 => {
            (scale * size.width.min(size.height)).floor()
        }
        _ => FALLBACK_WINDOW_SIDE,
    }
}

impl ChattyApp {
    /// Create the main window.
    /// Returns `false` if the window could not be created and the event
    /// loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let monitor = event_loop
            .primary_monitor()
            .map(|m| m.size().to_logical::<f64>(m.scale_factor()));
        let side = initial_window_side(monitor, self.config.window.scale);

        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.as_str())
            .with_inner_size(LogicalSize::new(side, side));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.badge = Box::new(WindowTitleBadge::attached(
            Arc::clone(&window),
            self.config.window.title.clone(),
        ));
        self.window = Some(window);
        self.webviews = Some(WebViewRegistry::new(WebViewManager::new()));
        tracing::info!(side, "Window created");
        true
    }

    /// Create the sidebar and one hidden surface per service.
    ///
    /// A service whose webview fails to build is skipped; the rest of the
    /// shell keeps running.
    pub(super) fn create_surfaces(&mut self) {
        let (Some(window), Some(registry)) = (&self.window, &mut self.webviews) else {
            tracing::warn!("Cannot create surfaces: window not initialized");
            return;
        };

        let viewport = viewport_of(window);
        let sidebar_width = f64::from(self.config.layout.sidebar_width);
        let devtools = self.config.window.devtools;

        let entries: Vec<SidebarEntry> = self
            .config
            .services
            .iter()
            .map(|s| SidebarEntry {
                id: s.id.clone(),
                name: s.display_name().to_string(),
            })
            .collect();
        let sidebar = WebViewConfig::with_html(sidebar_html(&entries)).devtools(devtools);
        if let Err(e) = registry.create(
            SurfaceId::Sidebar,
            window.as_ref(),
            to_wry_rect(&sidebar_rect(viewport, sidebar_width)),
            sidebar,
        ) {
            tracing::error!(error = %e, "Failed to create sidebar webview");
        }

        let bounds = to_wry_rect(&content_rect(viewport, sidebar_width));
        for service in &self.config.services {
            let config = WebViewConfig::with_url(service.launch_url.as_str())
                .init_script(build_count_script(&service.id, &service.count_script))
                .init_script(build_notification_shim(&service.id))
                .hidden()
                .devtools(devtools);

            match registry.create(
                SurfaceId::Service(service.id.clone()),
                window.as_ref(),
                bounds,
                config,
            ) {
                Ok(()) => {
                    tracing::info!(service = %service.id, url = %service.launch_url, "Hosted surface created");
                }
                Err(e) => {
                    tracing::error!(service = %service.id, error = %e, "Failed to create hosted surface");
                }
            }
        }
    }
}

/// Current drawable area of the window in logical pixels.
pub(super) fn viewport_of(window: &winit::window::Window) -> Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    Rect::new(0.0, 0.0, size.width, size.height)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_side_uses_shorter_dimension() {
        let side = initial_window_side(Some(LogicalSize::new(1920.0, 1080.0)), 0.85);
        assert!((side - 918.0).abs() < f64::EPSILON);
    }

    #[test]
    fn window_side_portrait_monitor() {
        let side = initial_window_side(Some(LogicalSize::new(1000.0, 2000.0)), 0.5);
        assert!((side - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn window_side_without_monitor_falls_back() {
        assert!((initial_window_side(None, 0.85) - FALLBACK_WINDOW_SIDE).abs() < f64::EPSILON);
        let degenerate = Some(LogicalSize::new(0.0, 0.0));
        assert!((initial_window_side(degenerate, 0.85) - FALLBACK_WINDOW_SIDE).abs() < f64::EPSILON);
    }
}
