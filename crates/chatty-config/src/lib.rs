//! Chatty configuration system.
//!
//! TOML-based configuration for the window, sidebar layout, logging and
//! the hosted service table. All sections use serde defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chatty_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{} services", config.services.len());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{ChattyConfig, ServiceDescriptor};

use std::path::Path;

use chatty_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a commented default `config.toml` if none exists. A file that
/// fails validation is returned as [`ConfigError::ValidationError`].
pub fn load_config() -> Result<ChattyConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<ChattyConfig, ConfigError> {
    toml_loader::load_from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_missing_path_is_file_not_found() {
        let err = load_config_from(Path::new("/tmp/nonexistent_chatty_config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_from_out_of_range_scale_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nscale = 5.0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("window.scale"));
    }
}
