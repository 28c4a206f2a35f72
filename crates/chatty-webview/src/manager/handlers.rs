use chatty_common::SurfaceId;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};
use crate::ipc::IpcMessage;

use super::{push, EventSink, WebViewManager};

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// URL prefixes that may never be navigated to in place.
///
/// Hosted services bounce through arbitrary SSO and CDN origins, so the
/// policy is a blocklist of local and script schemes rather than an
/// origin allowlist.
pub const BLOCKED_NAV_PREFIXES: &[&str] = &["file:", "javascript:", "vbscript:"];

/// Check whether an in-place navigation is allowed.
pub fn is_navigation_allowed(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    !lower.is_empty()
        && !BLOCKED_NAV_PREFIXES
            .iter()
            .any(|prefix| lower.starts_with(prefix))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();

            let Some(message) = IpcMessage::from_json(body) else {
                warn!(
                    %surface,
                    body_len = body.len(),
                    "IPC message rejected: invalid envelope"
                );
                return;
            };

            debug!(%surface, kind = %message.kind, "IPC message from JS");
            push(
                &events,
                WebViewEvent::IpcMessage {
                    surface: surface.clone(),
                    message,
                },
            );
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%surface, ?state, url = %url, "page load");
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(%surface, url = %url, "navigation blocked");
                return false;
            }
            true
        })
    }

    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(%surface, url = %url, "new window requested, denying");
            push(
                &events,
                WebViewEvent::NewWindowRequested {
                    surface: surface.clone(),
                    url,
                },
            );
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
