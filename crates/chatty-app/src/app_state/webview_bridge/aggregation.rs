//! `reportNotificationCount`: store, relabel, re-total, publish.

use chatty_common::ServiceId;
use chatty_webview::SidebarUpdate;

use crate::app_state::core::ChattyApp;

impl ChattyApp {
    /// Record the latest count for `id` and publish the new total.
    ///
    /// Every report republishes, even when nothing changed.
    pub(in crate::app_state) fn report_notification_count(&mut self, id: &ServiceId, count: u32) {
        let update = match self.state.report_count(id, count) {
            Ok(update) => update,
            Err(e) => {
                tracing::warn!(service = %id, count, "Count report ignored: {e}");
                return;
            }
        };

        tracing::debug!(
            service = %update.client_id,
            count = update.count,
            total = update.total,
            "Unread count reported"
        );
        self.send_to_sidebar(&SidebarUpdate::Count {
            client_id: update.client_id,
            label: update.label,
        });
        self.badge.set_badge_count(update.total);
    }

    /// Replay the active view and every label into the sidebar.
    pub(in crate::app_state) fn sync_sidebar(&self) {
        for (id, selected) in self.state.sidebar_selection() {
            if selected {
                self.send_to_sidebar(&SidebarUpdate::ActiveView(id.clone()));
            }
            self.send_to_sidebar(&SidebarUpdate::Count {
                client_id: id.clone(),
                label: self.state.label(id).unwrap_or_default(),
            });
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::tests::test_app;

    #[test]
    fn every_report_publishes_the_running_total() {
        let (mut app, badge) = test_app(&["a", "b", "c"], None);

        app.report_notification_count(&"a".into(), 3);
        app.report_notification_count(&"b".into(), 5);
        app.report_notification_count(&"a".into(), 0);
        app.report_notification_count(&"a".into(), 0);

        assert_eq!(*badge.0.borrow(), [3, 8, 5, 5]);
        assert_eq!(app.state.label(&"a".into()).as_deref(), Some(""));
        assert_eq!(app.state.label(&"b".into()).as_deref(), Some("5"));
    }

    #[test]
    fn unknown_service_report_publishes_nothing() {
        let (mut app, badge) = test_app(&["a"], None);
        app.report_notification_count(&"ghost".into(), 4);
        assert!(badge.0.borrow().is_empty());
        assert_eq!(app.state.total(), 0);
    }

    #[test]
    fn sync_sidebar_without_webviews_is_noop() {
        let (mut app, _) = test_app(&["a", "b"], None);
        app.report_notification_count(&"b".into(), 2);
        app.sync_sidebar();
        assert_eq!(app.state.total(), 2);
    }
}
