//! Application badge capability.
//!
//! The shell publishes one unread total; the host decides how to show it.

/// Accepts the unread total and displays it on the application.
///
/// Every call replaces the previous count. `0` clears the badge.
pub trait BadgeDisplay {
    fn set_badge_count(&mut self, count: u32);
}

/// Window title carrying the unread total, e.g. `"Chatty (8)"`.
///
/// winit exposes no dock/taskbar badge, so the title is where the
/// total surfaces on every platform.
pub fn badge_title(base: &str, count: u32) -> String {
    if count == 0 {
        base.to_string()
    } else {
        format!("{base} ({count})")
    }
}
