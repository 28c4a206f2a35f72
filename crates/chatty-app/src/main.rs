mod app_state;
mod cli;

use chatty_config::schema::LogLevel;
use chatty_config::ChattyConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = chatty_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Chatty crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

/// Filter directive: `--log-level` wins over the config file. A bare level
/// name is scoped to the chatty crates; anything else is passed through.
/// `RUST_LOG` sits between the two and is handled by [`env_filter`].
fn log_directive(cli_level: Option<&str>, config_level: LogLevel) -> String {
    match cli_level.map(str::trim) {
        Some(level) if !level.is_empty() => {
            let bare = ["trace", "debug", "info", "warn", "error"];
            if bare.contains(&level.to_ascii_lowercase().as_str()) {
                format!("chatty={}", level.to_ascii_lowercase())
            } else {
                level.to_string()
            }
        }
        _ => config_level.directive().to_string(),
    }
}

/// Build the subscriber filter. Precedence: `--log-level`, then
/// `RUST_LOG`, then the config's `logging.level`.
fn env_filter(cli_level: Option<&str>, config_level: LogLevel) -> EnvFilter {
    let cli_set = cli_level.is_some_and(|l| !l.trim().is_empty());
    let env_set = std::env::var(EnvFilter::DEFAULT_ENV).is_ok_and(|v| !v.trim().is_empty());
    if !cli_set && env_set {
        return EnvFilter::from_default_env();
    }

    match log_directive(cli_level, config_level).parse() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::new(config_level.directive()),
    }
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Installed before the config is read so loader diagnostics are
    // visible; the configured level is applied once the file is loaded.
    let (filter, filter_handle) =
        reload::Layer::new(env_filter(args.log_level.as_deref(), LogLevel::default()));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    tracing::info!("Chatty v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let loaded = match &args.config {
        Some(path) => chatty_config::load_config_from(path),
        None => chatty_config::load_config(),
    };
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ChattyConfig::default()
    });

    let filter = env_filter(args.log_level.as_deref(), config.logging.level);
    if let Err(e) = filter_handle.reload(filter) {
        tracing::warn!("Failed to apply configured log level: {e}");
    }
    tracing::info!(services = config.services.len(), "Config loaded");

    if let Err(e) = chatty_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::ChattyApp::new(config, args.open.as_deref());

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_level_used_without_flag() {
        assert_eq!(log_directive(None, LogLevel::Warn), "chatty=warn");
        assert_eq!(log_directive(Some("  "), LogLevel::Debug), "chatty=debug");
    }

    #[test]
    fn bare_flag_level_is_scoped() {
        assert_eq!(log_directive(Some("DEBUG"), LogLevel::Info), "chatty=debug");
    }

    #[test]
    fn full_directive_passes_through() {
        assert_eq!(
            log_directive(Some("chatty_webview=trace"), LogLevel::Info),
            "chatty_webview=trace"
        );
    }
}
