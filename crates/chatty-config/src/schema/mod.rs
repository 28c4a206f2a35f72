//! Configuration schema types for Chatty.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod logging;
mod services;
mod window;

pub use layout::*;
pub use logging::*;
pub use services::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Chatty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChattyConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
    /// Hosted services in sidebar order. Replaces the built-in table
    /// wholesale when present in the file.
    pub services: Vec<ServiceDescriptor>,
}

impl Default for ChattyConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            layout: LayoutConfig::default(),
            logging: LoggingConfig::default(),
            services: default_services(),
        }
    }
}
