//! Command channel between hosted pages and the shell.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: page code calls `window.chatty.openClient(id)` or
//!   `window.chatty.reportNotificationCount(id, count)`, which post
//!   `{"kind": ..., "payload": ...}` through `window.ipc.postMessage`.
//!   Delivery is fire-and-forget; nothing is sent back.
//! - **Rust -> JS**: the shell calls `webview.evaluate_script(...)` with a
//!   `window.chatty.ipc._dispatch(kind, payload)` snippet. Only the
//!   sidebar registers handlers.

use chatty_common::ServiceId;
use serde::{Deserialize, Serialize};

/// A raw message from JavaScript, before it is checked against the
/// command set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON, `null` when absent).
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Why a message was turned away.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IpcError {
    #[error("unknown command kind: {0:?}")]
    UnknownKind(String),

    #[error("invalid payload for {kind}: {reason}")]
    InvalidPayload { kind: &'static str, reason: String },
}

/// A validated command from a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Make `client_id` the active view.
    OpenClient { client_id: ServiceId },
    /// Latest unread count scraped from `client_id`'s page.
    ReportNotificationCount { client_id: ServiceId, count: u32 },
    /// The sidebar finished loading and wants the current state.
    SidebarReady,
}

#[derive(Deserialize)]
struct OpenClientPayload {
    client_id: ServiceId,
}

#[derive(Deserialize)]
struct CountPayload {
    client_id: ServiceId,
    /// `NaN` arrives as `null`; negative or fractional counts fail here too.
    count: u32,
}

fn decode<T: for<'de> Deserialize<'de>>(
    kind: &'static str,
    payload: &serde_json::Value,
) -> Result<T, IpcError> {
    T::deserialize(payload).map_err(|e| IpcError::InvalidPayload {
        kind,
        reason: e.to_string(),
    })
}

impl Command {
    pub const OPEN_CLIENT: &'static str = "open_client";
    pub const REPORT_NOTIFICATION_COUNT: &'static str = "report_notification_count";
    pub const SIDEBAR_READY: &'static str = "sidebar_ready";

    /// Validate a raw message into a command.
    pub fn from_message(msg: &IpcMessage) -> Result<Self, IpcError> {
        match msg.kind.as_str() {
            Self::OPEN_CLIENT => {
                let p: OpenClientPayload = decode(Self::OPEN_CLIENT, &msg.payload)?;
                Ok(Self::OpenClient {
                    client_id: p.client_id,
                })
            }
            Self::REPORT_NOTIFICATION_COUNT => {
                let p: CountPayload = decode(Self::REPORT_NOTIFICATION_COUNT, &msg.payload)?;
                Ok(Self::ReportNotificationCount {
                    client_id: p.client_id,
                    count: p.count,
                })
            }
            Self::SIDEBAR_READY => Ok(Self::SidebarReady),
            other => Err(IpcError::UnknownKind(other.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::OpenClient { .. } => Self::OPEN_CLIENT,
            Self::ReportNotificationCount { .. } => Self::REPORT_NOTIFICATION_COUNT,
            Self::SidebarReady => Self::SIDEBAR_READY,
        }
    }
}

/// JavaScript snippet that sets up the command bridge on the JS side.
/// Injected as an initialization script into every WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.chatty) {
        return;
    }
    var post = function(kind, payload) {
        window.ipc.postMessage(JSON.stringify({
            kind: kind,
            payload: payload === undefined ? null : payload
        }));
    };
    window.chatty = {
        openClient: function(clientId) {
            post('open_client', { client_id: String(clientId) });
        },
        reportNotificationCount: function(clientId, count) {
            post('report_notification_count', { client_id: String(clientId), count: count });
        },
        sidebarReady: function() {
            post('sidebar_ready', null);
        },
        ipc: {
            // Callbacks registered by JS code to handle messages from Rust
            _handlers: {},
            on: function(kind, callback) {
                this._handlers[kind] = callback;
            },
            _dispatch: function(kind, payload) {
                var handler = this._handlers[kind];
                if (handler) {
                    handler(payload);
                }
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.chatty && window.chatty.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
