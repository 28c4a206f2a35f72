//! Hand URLs to the OS default handler.

use chatty_common::PlatformError;
use tracing::info;

/// URL prefixes that may leave the shell for the system browser/mail client.
pub const EXTERNAL_URL_PREFIXES: &[&str] = &["https://", "http://", "mailto:"];

/// Check whether a URL may be handed to the OS default handler.
pub fn is_external_url_allowed(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    EXTERNAL_URL_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

/// Open `url` with the OS default handler without waiting for it.
pub fn open_external(url: &str) -> Result<(), PlatformError> {
    if !is_external_url_allowed(url) {
        return Err(PlatformError::ExternalOpenError(format!(
            "refusing to open non-web URL: {url}"
        )));
    }

    open::that_detached(url)
        .map_err(|e| PlatformError::ExternalOpenError(format!("failed to open {url}: {e}")))?;

    info!(url, "opened external link");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_web_and_mail_links() {
        assert!(is_external_url_allowed("https://example.com/invite"));
        assert!(is_external_url_allowed("http://example.com"));
        assert!(is_external_url_allowed("mailto:someone@example.com"));
        assert!(is_external_url_allowed("HTTPS://EXAMPLE.COM"));
    }

    #[test]
    fn blocks_local_and_script_links() {
        assert!(!is_external_url_allowed("file:///etc/passwd"));
        assert!(!is_external_url_allowed("javascript:alert(1)"));
        assert!(!is_external_url_allowed("smb://share/payload"));
        assert!(!is_external_url_allowed(""));
        assert!(!is_external_url_allowed("not-a-url"));
    }

    #[test]
    fn open_external_refuses_blocked_scheme_without_spawning() {
        let err = open_external("file:///etc/hosts").unwrap_err();
        assert!(matches!(err, PlatformError::ExternalOpenError(_)));
        assert!(err.to_string().contains("non-web URL"));
    }
}
