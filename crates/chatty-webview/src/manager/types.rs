/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Scripts run before page scripts on every navigation, after the
    /// command bridge.
    pub init_scripts: Vec<String>,
    /// Whether the WebView starts visible.
    pub visible: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string. `None` keeps the engine default, which
    /// hosted sites expect.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media (call ringtones).
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            init_scripts: Vec::new(),
            visible: true,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: true,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    /// Append an initialization script.
    pub fn init_script(mut self, script: impl Into<String>) -> Self {
        self.init_scripts.push(script.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn devtools(mut self, enabled: bool) -> Self {
        self.devtools = self.devtools || enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_config_defaults() {
        let config = WebViewConfig::with_url("https://app.slack.com/client/");
        assert_eq!(config.url.as_deref(), Some("https://app.slack.com/client/"));
        assert!(config.html.is_none());
        assert!(config.visible);
        assert!(config.user_agent.is_none());
        assert!(config.init_scripts.is_empty());
    }

    #[test]
    fn builder_helpers_compose() {
        let config = WebViewConfig::with_html("<p></p>")
            .init_script("a()")
            .init_script("b()")
            .hidden()
            .devtools(true);
        assert_eq!(config.init_scripts, ["a()", "b()"]);
        assert!(!config.visible);
        assert!(config.devtools);
    }
}
