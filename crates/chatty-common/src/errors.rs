use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("external open error: {0}")]
    ExternalOpenError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChattyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("unknown service: {0}")]
    UnknownService(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("duplicate service id 'slack'".into());
        assert_eq!(
            err.to_string(),
            "config validation error: duplicate service id 'slack'"
        );
    }

    #[test]
    fn platform_error_display() {
        let err = PlatformError::ExternalOpenError("no handler for mailto".into());
        assert_eq!(err.to_string(), "external open error: no handler for mailto");

        let err = PlatformError::PathError("could not determine config directory".into());
        assert_eq!(
            err.to_string(),
            "path error: could not determine config directory"
        );
    }

    #[test]
    fn chatty_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ChattyError = config_err.into();
        assert!(matches!(err, ChattyError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn chatty_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ChattyError = io_err.into();
        assert!(matches!(err, ChattyError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn chatty_error_other_variants() {
        let err = ChattyError::WebView("child webview rejected".into());
        assert_eq!(err.to_string(), "webview error: child webview rejected");

        let err = ChattyError::UnknownService("icq".into());
        assert_eq!(err.to_string(), "unknown service: icq");
    }
}
