//! External link policy: new windows leave the shell for the OS handler.

use chatty_common::SurfaceId;
use chatty_platform::{is_external_url_allowed, open_external};

use crate::app_state::core::ChattyApp;

impl ChattyApp {
    /// A surface tried to open a new window. The webview already denied
    /// it; hand web and mail links to the OS, refuse everything else.
    pub(in crate::app_state) fn handle_new_window(&self, surface: &SurfaceId, url: &str) {
        if !is_external_url_allowed(url) {
            tracing::warn!(%surface, url, "External link refused: scheme not allowed");
            return;
        }
        if let Err(e) = open_external(url) {
            tracing::warn!(%surface, url, "External link failed: {e}");
        }
    }
}
