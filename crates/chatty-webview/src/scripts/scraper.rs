use std::time::Duration;

use chatty_common::ServiceId;

use super::js_string_literal;

/// How often each hosted page scrapes and reports its unread count.
pub const COUNT_POLL_INTERVAL: Duration = Duration::from_secs(5);

const TEMPLATE: &str = r#"
(function() {
    if (window.top !== window.self || window.__chattyCountTimer) {
        return;
    }
    var clientId = __CHATTY_CLIENT_ID__;
    var getNotificationCount = function() {
__CHATTY_COUNT_SCRIPT__
    };
    window.__chattyCountTimer = setInterval(function() {
        var count;
        try {
            count = getNotificationCount();
        } catch (e) {
            console.debug('[chatty] unread count failed for ' + clientId, e);
            return;
        }
        window.chatty.reportNotificationCount(clientId, count);
    }, __CHATTY_INTERVAL_MS__);
})();
"#;

/// Build the polling script for one service.
///
/// `count_script` is a function body that returns the unread count. A tick
/// whose body throws is skipped; the next tick runs independently. Only
/// the top-level frame reports, and a page only ever runs one timer.
pub fn build_count_script(service_id: &ServiceId, count_script: &str) -> String {
    TEMPLATE
        .replace("__CHATTY_CLIENT_ID__", &js_string_literal(service_id))
        .replace(
            "__CHATTY_INTERVAL_MS__",
            &COUNT_POLL_INTERVAL.as_millis().to_string(),
        )
        .replace("__CHATTY_COUNT_SCRIPT__", count_script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_five_seconds() {
        assert_eq!(COUNT_POLL_INTERVAL, Duration::from_secs(5));
    }

    #[test]
    fn embeds_id_interval_and_body() {
        let script = build_count_script(&ServiceId::new("slack"), "return 7;");
        assert!(script.contains("var clientId = \"slack\";"));
        assert!(script.contains("}, 5000);"));
        assert!(script.contains("return 7;"));
        assert!(script.contains("window.chatty.reportNotificationCount(clientId, count)"));
        assert!(!script.contains("__CHATTY_"));
    }

    #[test]
    fn skips_failed_ticks_without_reporting() {
        let script = build_count_script(&ServiceId::new("a"), "throw new Error('x');");
        let catch = script.find("catch (e)").expect("has catch");
        let report = script.find("reportNotificationCount").expect("has report");
        let early_return = script[catch..].find("return;").expect("catch returns") + catch;
        assert!(early_return < report);
    }

    #[test]
    fn only_top_frame_installs_timer() {
        let script = build_count_script(&ServiceId::new("a"), "return 0;");
        assert!(script.contains("window.top !== window.self"));
        assert!(script.contains("window.__chattyCountTimer"));
    }

    #[test]
    fn count_script_is_inserted_verbatim() {
        // The body is substituted last, so placeholder-like text inside it survives.
        let script = build_count_script(&ServiceId::new("a"), "return '__CHATTY_CLIENT_ID__'.length;");
        assert!(script.contains("return '__CHATTY_CLIENT_ID__'.length;"));
    }
}
