use std::path::PathBuf;

use clap::Parser;

/// Chatty: every web chat service in one window, with a combined unread badge.
#[derive(Parser, Debug)]
#[command(name = "chatty", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// tracing directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Service id to show first.
    #[arg(long)]
    pub open: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "chatty",
            "--config",
            "/tmp/chatty.toml",
            "--log-level",
            "debug",
            "--open",
            "slack",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/chatty.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.open.as_deref(), Some("slack"));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["chatty"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.open.is_none());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
