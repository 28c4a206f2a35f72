//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Main window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Base window title. The unread total is appended when non-zero.
    pub title: String,
    /// Window side as a fraction of the primary monitor's shorter
    /// dimension (valid range: 0.2-1.0).
    pub scale: f64,
    /// Enable webview dev tools (always on in debug builds).
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Chatty".into(),
            scale: 0.85,
            devtools: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Chatty");
        assert!((config.scale - 0.85).abs() < f64::EPSILON);
        assert!(!config.devtools);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str("scale = 0.5").unwrap();
        assert!((config.scale - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.title, "Chatty");
    }
}
