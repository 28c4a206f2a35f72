//! Scripts injected into every hosted page.
//!
//! Both run as initialization scripts, so they are re-installed on every
//! navigation and run before the page's own code.

mod scraper;
mod shim;

pub use scraper::{build_count_script, COUNT_POLL_INTERVAL};
pub use shim::build_notification_shim;

use chatty_common::ServiceId;

/// Render a service id as a JavaScript string literal.
pub(crate) fn js_string_literal(id: &ServiceId) -> String {
    serde_json::to_string(id.as_str()).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literal_is_quoted() {
        assert_eq!(js_string_literal(&ServiceId::new("slack")), "\"slack\"");
    }

    #[test]
    fn string_literal_escapes_quotes() {
        // Ids are validated upstream, but the literal must still be inert.
        assert_eq!(
            js_string_literal(&ServiceId::new("a\"b")),
            "\"a\\\"b\""
        );
    }
}
