//! Internal constants for the app state module.

use std::time::Duration;

/// How often to drain the webview event queue.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Window side when the platform reports no primary monitor.
pub(super) const FALLBACK_WINDOW_SIDE: f64 = 900.0;
