//! Command-channel validation and dispatch from webviews to the controller.

use chatty_common::{ServiceId, SurfaceId};
use chatty_webview::{Command, IpcMessage};

use crate::app_state::core::ChattyApp;

// =============================================================================
// ORIGIN CHECKS
// =============================================================================

/// Hosted pages may only report their own count.
pub(super) fn may_report_for(surface: &SurfaceId, client_id: &ServiceId) -> bool {
    surface.service() == Some(client_id)
}

/// Only the sidebar announces sidebar readiness.
pub(super) fn may_announce_sidebar(surface: &SurfaceId) -> bool {
    *surface == SurfaceId::Sidebar
}

// =============================================================================
// DISPATCH
// =============================================================================

impl ChattyApp {
    /// Handle a single command-channel message from a webview.
    pub(in crate::app_state) fn handle_ipc_message(
        &mut self,
        surface: &SurfaceId,
        message: &IpcMessage,
    ) {
        let command = match Command::from_message(message) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!(%surface, "IPC message rejected: {e}");
                return;
            }
        };

        tracing::debug!(%surface, kind = command.kind(), "IPC message dispatched");

        match command {
            Command::OpenClient { client_id } => {
                self.open_client(&client_id);
            }
            Command::ReportNotificationCount { client_id, count } => {
                if !may_report_for(surface, &client_id) {
                    tracing::warn!(
                        %surface,
                        service = %client_id,
                        "Count report rejected: surface reported for another service"
                    );
                    return;
                }
                self.report_notification_count(&client_id, count);
            }
            Command::SidebarReady => {
                if !may_announce_sidebar(surface) {
                    tracing::warn!(%surface, "sidebar_ready rejected: not the sidebar");
                    return;
                }
                self.sync_sidebar();
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::tests::test_app;

    fn service(id: &str) -> SurfaceId {
        SurfaceId::Service(id.into())
    }

    /// Deliver `body` the way the webview layer does: envelopes that do
    /// not parse never reach the app.
    fn deliver(app: &mut ChattyApp, surface: &SurfaceId, body: &str) {
        if let Some(message) = IpcMessage::from_json(body) {
            app.handle_ipc_message(surface, &message);
        }
    }

    #[test]
    fn report_origin_must_match() {
        assert!(may_report_for(&service("a"), &"a".into()));
        assert!(!may_report_for(&service("a"), &"b".into()));
        assert!(!may_report_for(&SurfaceId::Sidebar, &"a".into()));
    }

    #[test]
    fn sidebar_ready_origin() {
        assert!(may_announce_sidebar(&SurfaceId::Sidebar));
        assert!(!may_announce_sidebar(&service("a")));
    }

    #[test]
    fn dispatches_report_from_own_surface() {
        let (mut app, badge) = test_app(&["a", "b"], None);
        deliver(
            &mut app,
            &service("b"),
            r#"{"kind":"report_notification_count","payload":{"client_id":"b","count":4}}"#,
        );
        assert_eq!(app.state.count(&"b".into()), Some(4));
        assert_eq!(*badge.0.borrow(), [4]);
    }

    #[test]
    fn drops_report_for_foreign_service() {
        let (mut app, badge) = test_app(&["a", "b"], None);
        deliver(
            &mut app,
            &service("a"),
            r#"{"kind":"report_notification_count","payload":{"client_id":"b","count":4}}"#,
        );
        assert_eq!(app.state.count(&"b".into()), Some(0));
        assert!(badge.0.borrow().is_empty());
    }

    #[test]
    fn sidebar_can_open_any_client() {
        let (mut app, _) = test_app(&["a", "b", "c"], None);
        deliver(
            &mut app,
            &SurfaceId::Sidebar,
            r#"{"kind":"open_client","payload":{"client_id":"c"}}"#,
        );
        assert_eq!(app.state.active().as_str(), "c");
    }

    #[test]
    fn notification_click_from_hosted_page_opens_client() {
        let (mut app, _) = test_app(&["a", "b"], None);
        deliver(
            &mut app,
            &service("b"),
            r#"{"kind":"open_client","payload":{"client_id":"b"}}"#,
        );
        assert_eq!(app.state.active().as_str(), "b");
    }

    #[test]
    fn malformed_messages_change_nothing() {
        let (mut app, badge) = test_app(&["a"], None);
        for body in [
            "not json",
            r#"{"kind":"eval","payload":"alert(1)"}"#,
            r#"{"kind":"report_notification_count","payload":{"client_id":"a","count":null}}"#,
            r#"{"kind":"report_notification_count","payload":{"client_id":"a","count":-2}}"#,
            r#"{"kind":"open_client","payload":{}}"#,
        ] {
            deliver(&mut app, &service("a"), body);
        }
        assert_eq!(app.state.active().as_str(), "a");
        assert_eq!(app.state.total(), 0);
        assert!(badge.0.borrow().is_empty());
    }
}
