use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Identifier of a hosted chat service (`slack`, `discord`, ...).
///
/// Ids end up inside a CSS attribute selector in the sidebar and inside
/// JavaScript string literals in injected scripts, so only a narrow
/// character set is considered valid. Construction is unchecked; config
/// validation rejects ids for which [`ServiceId::is_valid`] is false.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

fn service_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Static literal; cannot fail to compile.
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("valid service id regex"))
}

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        service_id_pattern().is_match(&self.0)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for ServiceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Every webview the shell owns: the sidebar plus one hosted surface per service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceId {
    Sidebar,
    Service(ServiceId),
}

impl SurfaceId {
    /// The service this surface hosts, if any.
    pub fn service(&self) -> Option<&ServiceId> {
        match self {
            Self::Sidebar => None,
            Self::Service(id) => Some(id),
        }
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sidebar => f.write_str("sidebar"),
            Self::Service(id) => write!(f, "service-{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_id_accepts_simple_names() {
        assert!(ServiceId::new("slack").is_valid());
        assert!(ServiceId::new("gmessages").is_valid());
        assert!(ServiceId::new("team-chat_2").is_valid());
        assert!(ServiceId::new("9gag").is_valid());
    }

    #[test]
    fn service_id_rejects_selector_and_script_breakers() {
        assert!(!ServiceId::new("").is_valid());
        assert!(!ServiceId::new("Slack").is_valid());
        assert!(!ServiceId::new("-leading").is_valid());
        assert!(!ServiceId::new("a b").is_valid());
        assert!(!ServiceId::new("x']").is_valid());
        assert!(!ServiceId::new("a\"b").is_valid());
        assert!(!ServiceId::new("a\\b").is_valid());
    }

    #[test]
    fn service_id_serializes_as_plain_string() {
        let id = ServiceId::new("discord");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"discord\"");
        let back: ServiceId = serde_json::from_str("\"discord\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn surface_display() {
        assert_eq!(SurfaceId::Sidebar.to_string(), "sidebar");
        assert_eq!(
            SurfaceId::Service(ServiceId::new("slack")).to_string(),
            "service-slack"
        );
    }

    #[test]
    fn surface_service_accessor() {
        assert!(SurfaceId::Sidebar.service().is_none());
        let surface = SurfaceId::Service("whatsapp".into());
        assert_eq!(surface.service().map(ServiceId::as_str), Some("whatsapp"));
    }
}
