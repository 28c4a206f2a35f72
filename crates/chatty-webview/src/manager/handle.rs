use wry::WebView;

/// Handle to a managed WebView instance: script evaluation, placement and
/// visibility within the parent window.
pub struct WebViewHandle {
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the WebView.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}
