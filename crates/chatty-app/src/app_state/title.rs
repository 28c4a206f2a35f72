//! Window title management: carries the unread total.

use std::sync::Arc;

use winit::window::Window;

use chatty_platform::{badge_title, BadgeDisplay};

/// Publishes the unread total into the window title, e.g. `"Chatty (8)"`.
pub(super) struct WindowTitleBadge {
    window: Option<Arc<Window>>,
    base: String,
    shown: Option<u32>,
}

impl WindowTitleBadge {
    /// A badge with no window yet. Counts published before a window is
    /// attached are dropped.
    pub(super) fn detached(base: String) -> Self {
        Self {
            window: None,
            base,
            shown: None,
        }
    }

    pub(super) fn attached(window: Arc<Window>, base: String) -> Self {
        Self {
            window: Some(window),
            base,
            shown: None,
        }
    }

    pub(super) fn title_for(&self, count: u32) -> String {
        badge_title(&self.base, count)
    }
}

impl BadgeDisplay for WindowTitleBadge {
    fn set_badge_count(&mut self, count: u32) {
        if self.shown == Some(count) {
            return;
        }
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&self.title_for(count));
        self.shown = Some(count);
    }
}

// =============================================================================
// TESTS
// =============================================================================
