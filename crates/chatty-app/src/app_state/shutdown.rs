//! Graceful shutdown: destroy surfaces, release the window.

use super::core::ChattyApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl ChattyApp {
    /// Tear down every surface before the window goes away.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.destroy_surfaces();
        self.webviews = None;
        self.window = None;
        self.should_exit = true;

        tracing::info!(total = self.state.total(), "Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
