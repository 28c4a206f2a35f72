use std::sync::Arc;

use chatty_common::{ChattyError, Result, SurfaceId};
use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// The command bridge is always installed first, then
    /// `config.init_scripts` in order. The WebView is positioned at
    /// `bounds` within the parent window. Build failures surface as
    /// [`ChattyError::WebView`].
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        surface: SurfaceId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_visible(config.visible)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(false);

        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script.as_str());
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua.as_str());
        }

        // Command channel: JS -> Rust
        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), surface.clone());

        builder = Self::attach_page_load_handler(builder, surface.clone());

        // In-place navigation: web schemes only
        builder = Self::attach_navigation_handler(builder, surface.clone());

        // New windows are always denied and surfaced as events
        builder =
            Self::attach_new_window_handler(builder, Arc::clone(&self.events), surface.clone());

        let initial_url = match (&config.url, &config.html) {
            (Some(url), _) => {
                builder = builder.with_url(url.as_str());
                url.as_str()
            }
            (None, Some(html)) => {
                builder = builder.with_html(html.as_str());
                "about:blank"
            }
            (None, None) => {
                builder = builder.with_html("<html><body></body></html>");
                "about:blank"
            }
        };

        let webview = builder
            .build_as_child(window)
            .map_err(|e| ChattyError::WebView(format!("{surface}: {e}")))?;

        debug!(%surface, url = %initial_url, "WebView created");

        Ok(WebViewHandle { webview })
    }
}
