//! Sidebar markup and the messages the shell sends to it.
//!
//! The sidebar is a small local page: one `button.client-button` per
//! service inside `#chatbar`, each carrying `data-client-id`, a name label
//! and a `label.count` badge. Clicking a button posts `open_client`.

use chatty_common::ServiceId;
use serde_json::json;

use crate::ipc::js_dispatch_message;

/// One sidebar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub id: ServiceId,
    pub name: String,
}

/// State pushed from the shell into the sidebar page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarUpdate {
    /// Mark `0` selected and every other button unselected.
    ActiveView(ServiceId),
    /// Set the badge label of one button (`""` hides it).
    Count { client_id: ServiceId, label: String },
}

impl SidebarUpdate {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ActiveView(_) => "set_active_view",
            Self::Count { .. } => "set_count",
        }
    }

    pub fn payload(&self) -> serde_json::Value {
        match self {
            Self::ActiveView(id) => json!({ "client_id": id }),
            Self::Count { client_id, label } => json!({ "client_id": client_id, "label": label }),
        }
    }

    /// Script that applies this update inside the sidebar page.
    pub fn to_script(&self) -> String {
        js_dispatch_message(self.kind(), &self.payload())
    }
}

const SIDEBAR_SCRIPT: &str = r#"
(function() {
    var buttons = function() {
        return document.querySelectorAll('#chatbar .client-button');
    };
    buttons().forEach(function(button) {
        button.addEventListener('click', function() {
            window.chatty.openClient(button.dataset.clientId);
        });
    });
    window.chatty.ipc.on('set_active_view', function(payload) {
        buttons().forEach(function(button) {
            button.classList.toggle('active', button.dataset.clientId === payload.client_id);
        });
    });
    window.chatty.ipc.on('set_count', function(payload) {
        buttons().forEach(function(button) {
            if (button.dataset.clientId !== payload.client_id) {
                return;
            }
            var label = button.querySelector('label.count');
            if (label) {
                label.textContent = payload.label;
            }
        });
    });
    window.chatty.sidebarReady();
})();
"#;

const SIDEBAR_STYLE: &str = r#"
html, body { margin: 0; height: 100%; background: #1e1f22; font-family: sans-serif; }
#chatbar { display: flex; flex-direction: column; align-items: center; padding-top: 8px; gap: 8px; }
.client-button { position: relative; width: 64px; height: 64px; border: 0; border-radius: 12px;
  background: #2b2d31; color: #dbdee1; font-size: 11px; cursor: pointer; }
.client-button.active { background: #5865f2; color: #fff; }
.client-button label { pointer-events: none; }
.client-button label.count { position: absolute; top: 2px; right: 2px; min-width: 16px;
  border-radius: 8px; background: #f23f43; color: #fff; font-size: 10px; line-height: 16px; }
.client-button label.count:empty { display: none; }
"#;

/// Escape text for use in HTML content and double-quoted attributes.
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full sidebar document for `entries`, in order.
pub fn sidebar_html(entries: &[SidebarEntry]) -> String {
    let buttons: String = entries
        .iter()
        .map(|entry| {
            format!(
                "<button class=\"client-button\" data-client-id=\"{id}\" title=\"{name}\">\
                 <label class=\"name\">{name}</label><label class=\"count\"></label></button>\n",
                id = html_escape(entry.id.as_str()),
                name = html_escape(&entry.name),
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>{SIDEBAR_STYLE}</style>\n</head>\n\
         <body>\n<nav id=\"chatbar\">\n{buttons}</nav>\n<script>{SIDEBAR_SCRIPT}</script>\n</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<SidebarEntry> {
        vec![
            SidebarEntry {
                id: "slack".into(),
                name: "Slack".into(),
            },
            SidebarEntry {
                id: "discord".into(),
                name: "Discord".into(),
            },
        ]
    }

    #[test]
    fn renders_one_button_per_entry_in_order() {
        let html = sidebar_html(&entries());
        assert_eq!(html.matches("class=\"client-button\"").count(), 2);
        let slack = html.find("data-client-id=\"slack\"").unwrap();
        let discord = html.find("data-client-id=\"discord\"").unwrap();
        assert!(slack < discord);
        assert_eq!(html.matches("<label class=\"count\"></label>").count(), 2);
    }

    #[test]
    fn escapes_names() {
        let html = sidebar_html(&[SidebarEntry {
            id: "x".into(),
            name: "<b>\"Evil\" & co</b>".into(),
        }]);
        assert!(html.contains("&lt;b&gt;&quot;Evil&quot; &amp; co&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn script_announces_readiness_and_handles_updates() {
        let html = sidebar_html(&entries());
        assert!(html.contains("window.chatty.sidebarReady()"));
        assert!(html.contains("on('set_active_view'"));
        assert!(html.contains("on('set_count'"));
        assert!(html.contains("window.chatty.openClient(button.dataset.clientId)"));
    }

    #[test]
    fn active_view_update_script() {
        let update = SidebarUpdate::ActiveView("slack".into());
        assert_eq!(update.kind(), "set_active_view");
        assert_eq!(update.payload(), json!({"client_id": "slack"}));
        assert!(update
            .to_script()
            .contains("_dispatch(\"set_active_view\", {\"client_id\":\"slack\"})"));
    }

    #[test]
    fn count_update_payload_carries_label() {
        let update = SidebarUpdate::Count {
            client_id: "discord".into(),
            label: String::new(),
        };
        assert_eq!(update.kind(), "set_count");
        assert_eq!(update.payload(), json!({"client_id": "discord", "label": ""}));
    }
}
