//! Full configuration validation.
//!
//! Validates numeric ranges and the service table. Each domain has its
//! own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod helpers;
mod services;


use crate::schema::ChattyConfig;
use chatty_common::ConfigError;

use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ChattyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range_f64(&mut errors, "window.scale", config.window.scale, 0.2, 1.0);
    validate_range(
        &mut errors,
        "layout.sidebar_width",
        config.layout.sidebar_width,
        0,
        400,
    );
    services::validate_services(&mut errors, &config.services);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
