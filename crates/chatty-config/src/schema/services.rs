//! Hosted service descriptors.

use chatty_common::ServiceId;
use serde::{Deserialize, Serialize};

/// One hosted chat service.
///
/// `count_script` is a JavaScript function body evaluated inside the
/// service's page. It must `return` the number of unread items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub id: ServiceId,
    /// Label shown on the sidebar button. Defaults to the id.
    #[serde(default)]
    pub name: String,
    pub launch_url: String,
    pub count_script: String,
}

impl ServiceDescriptor {
    pub fn new(
        id: &str,
        name: &str,
        launch_url: &str,
        count_script: &str,
    ) -> Self {
        Self {
            id: ServiceId::new(id),
            name: name.to_string(),
            launch_url: launch_url.to_string(),
            count_script: count_script.to_string(),
        }
    }

    /// Sidebar label, falling back to the id when no name is configured.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}

/// Sums the numeric text of every element matching `selector`.
fn badge_sum_script(selector: &str) -> String {
    format!(
        r#"return Array.from(document.querySelectorAll('{selector}'))
  .map(elem => Number(elem.textContent ?? '0'))
  .reduce((prev, cur) => prev + cur, 0);"#
    )
}

/// Counts the elements matching `selector`.
fn element_count_script(selector: &str) -> String {
    format!("return document.querySelectorAll('{selector}').length;")
}

/// The built-in service table. Selectors track each site's current markup
/// and break when the site ships a redesign.
pub fn default_services() -> Vec<ServiceDescriptor> {
    vec![
        ServiceDescriptor::new(
            "gchat",
            "Chat",
            "https://chat.google.com",
            &badge_sum_script("div.nH div.nH.bkL .XU"),
        ),
        ServiceDescriptor::new(
            "slack",
            "Slack",
            "https://app.slack.com/client/",
            &badge_sum_script(".p-channel_sidebar__channel .c-mention_badge"),
        ),
        ServiceDescriptor::new(
            "discord",
            "Discord",
            "https://discord.com/app/",
            &badge_sum_script(".listItem-3SmSlK .lowerBadge-3WTshO"),
        ),
        ServiceDescriptor::new(
            "gmessages",
            "Messages",
            "https://messages.google.com/web/conversations",
            &element_count_script("nav.conversation-list .unread.text-content"),
        ),
        ServiceDescriptor::new(
            "whatsapp",
            "WhatsApp",
            "https://web.whatsapp.com/",
            &element_count_script("#pane-side div._3OvU8 > div._37FrU div._1i_wG div._1pJ9J"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_five_services_in_order() {
        let services = default_services();
        let ids: Vec<&str> = services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["gchat", "slack", "discord", "gmessages", "whatsapp"]);
    }

    #[test]
    fn default_services_are_well_formed() {
        for service in default_services() {
            assert!(service.id.is_valid(), "{} must be a valid id", service.id);
            assert!(service.launch_url.starts_with("https://"));
            assert!(service.count_script.contains("return"));
        }
    }

    #[test]
    fn badge_sum_script_embeds_selector() {
        let script = badge_sum_script(".badge");
        assert!(script.contains("querySelectorAll('.badge')"));
        assert!(script.contains("reduce"));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let mut service = ServiceDescriptor::new("irc", "", "https://irc.example", "return 0;");
        assert_eq!(service.display_name(), "irc");
        service.name = "IRC".into();
        assert_eq!(service.display_name(), "IRC");
    }

    #[test]
    fn descriptor_deserializes_without_name() {
        let toml_str = r#"
id = "matrix"
launch_url = "https://app.element.io/"
count_script = "return 0;"
"#;
        let service: ServiceDescriptor = toml::from_str(toml_str).unwrap();
        assert_eq!(service.id.as_str(), "matrix");
        assert!(service.name.is_empty());
    }
}
