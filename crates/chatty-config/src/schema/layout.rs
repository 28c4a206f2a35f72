//! Layout configuration types.

use serde::{Deserialize, Serialize};

/// Sidebar/content split.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the sidebar in logical pixels (valid range: 0-400).
    /// The active service fills the rest of the window.
    pub sidebar_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { sidebar_width: 84 }
    }
}
