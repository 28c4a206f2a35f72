//! WebView event types.

use chatty_common::SurfaceId;
use serde::{Deserialize, Serialize};

use crate::ipc::IpcMessage;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events a WebView hands to the controller.
///
/// Every surface pushes into the same queue, so events from one surface
/// stay in order while events from different surfaces interleave.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// A well-formed command-channel envelope was received from JavaScript.
    IpcMessage {
        surface: SurfaceId,
        message: IpcMessage,
    },
    /// The page tried to open a new top-level window. Always denied;
    /// the shell decides whether to hand the URL to the OS.
    NewWindowRequested { surface: SurfaceId, url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_load_state_from_wry() {
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Started),
            PageLoadState::Started
        );
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Finished),
            PageLoadState::Finished
        );
    }
}
