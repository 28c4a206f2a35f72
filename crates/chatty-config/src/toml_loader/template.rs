/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r##"# Chatty Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Chatty"
# scale = 0.85           # 0.2-1.0, fraction of the monitor's shorter side
# devtools = false

[layout]
# sidebar_width = 84     # 0-400

[logging]
# level = "info"         # trace, debug, info, warn, error

# Hosted services, in sidebar order. Defining any [[services]] entry
# replaces the built-in table (gchat, slack, discord, gmessages, whatsapp).
# count_script is a JavaScript function body returning the unread count.
#
# [[services]]
# id = "slack"
# name = "Slack"
# launch_url = "https://app.slack.com/client/"
# count_script = "return document.querySelectorAll('.c-mention_badge').length;"
"##
}
