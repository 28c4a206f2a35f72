use chatty_common::ServiceId;

use super::js_string_literal;

const TEMPLATE: &str = r#"
(function() {
    var NativeNotification = window.Notification;
    if (typeof NativeNotification !== 'function' || NativeNotification.__chattyShim) {
        return;
    }
    var clientId = __CHATTY_CLIENT_ID__;
    class ChattyNotification {
        constructor(title, options) {
            this.notification = new NativeNotification(title, options);
            this.notification.addEventListener('click', function() {
                window.chatty.openClient(clientId);
            });
        }
        close() {
            return this.notification.close();
        }
        addEventListener() {
            return this.notification.addEventListener.apply(this.notification, arguments);
        }
        removeEventListener() {
            return this.notification.removeEventListener.apply(this.notification, arguments);
        }
        get title() { return this.notification.title; }
        get body() { return this.notification.body; }

        get onclick() { return this.notification.onclick; }
        set onclick(value) { this.notification.onclick = value; }

        get onclose() { return this.notification.onclose; }
        set onclose(value) { this.notification.onclose = value; }

        get onerror() { return this.notification.onerror; }
        set onerror(value) { this.notification.onerror = value; }

        get onshow() { return this.notification.onshow; }
        set onshow(value) { this.notification.onshow = value; }
    }
    ChattyNotification.__chattyShim = true;
    Object.defineProperty(ChattyNotification, 'permission', {
        get: function() { return 'granted'; }
    });
    ChattyNotification.requestPermission = function(callback) {
        if (typeof callback === 'function') {
            callback('granted');
        }
        return Promise.resolve('granted');
    };
    window.Notification = ChattyNotification;
})();
"#;

/// Build the `Notification` substitute for one service.
///
/// Notifications still reach the OS, and clicking one also activates the
/// service in the shell. Permission reads as granted and is never
/// prompted for. Pages on engines without a native `Notification` are
/// left untouched.
pub fn build_notification_shim(service_id: &ServiceId) -> String {
    TEMPLATE.replace("__CHATTY_CLIENT_ID__", &js_string_literal(service_id))
}
