//! ChattyApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use chatty_common::ServiceId;
use chatty_config::ChattyConfig;
use chatty_platform::BadgeDisplay;
use chatty_webview::WebViewRegistry;

use super::shell_state::ShellState;
use super::title::WindowTitleBadge;

/// Top-level application state.
pub struct ChattyApp {
    pub(super) config: ChattyConfig,

    // Controller state: active view + per-service counts
    pub(super) state: ShellState,
    /// Service activated once the surfaces exist.
    pub(super) initial_service: ServiceId,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Sidebar + one hosted surface per service
    pub(super) webviews: Option<WebViewRegistry>,

    // Where the unread total is published
    pub(super) badge: Box<dyn BadgeDisplay>,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ChattyApp {
    /// `open` names the service to show first; unknown ids fall back to
    /// the first configured service.
    pub fn new(config: ChattyConfig, open: Option<&str>) -> Self {
        let badge = Box::new(WindowTitleBadge::detached(config.window.title.clone()));
        Self::with_badge(config, open, badge)
    }

    pub(super) fn with_badge(
        mut config: ChattyConfig,
        open: Option<&str>,
        badge: Box<dyn BadgeDisplay>,
    ) -> Self {
        let state = match ShellState::new(service_ids(&config)) {
            Some(state) => state,
            None => {
                tracing::warn!("No services configured, using the built-in table");
                config.services = chatty_config::schema::default_services();
                ShellState::new(service_ids(&config))
                    .unwrap_or_else(|| unreachable!("built-in service table is never empty"))
            }
        };

        let initial_service = match open.map(ServiceId::new) {
            Some(id) if state.contains(&id) => id,
            Some(id) => {
                tracing::warn!(service = %id, "Unknown --open service, starting on the first");
                state.active().clone()
            }
            None => state.active().clone(),
        };

        Self {
            config,
            state,
            initial_service,
            window: None,
            webviews: None,
            badge,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}

fn service_ids(config: &ChattyConfig) -> Vec<ServiceId> {
    config.services.iter().map(|s| s.id.clone()).collect()
}

// =============================================================================
// TESTS
// =============================================================================
