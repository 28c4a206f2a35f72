//! WebView layer for hosting chat services inside the Chatty window.
//!
//! Wraps the `wry` crate to provide:
//! - Managed child WebViews keyed by [`SurfaceId`](chatty_common::SurfaceId)
//! - The command channel (JavaScript -> Rust) and sidebar dispatch (Rust -> JavaScript)
//! - Injected page scripts: unread-count scraper and notification shim
//! - Sidebar markup generated from the service table
//! - Navigation and new-window policy

pub mod events;
pub mod ipc;
pub mod manager;
pub mod scripts;
pub mod sidebar;

pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{Command, IpcError, IpcMessage};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
pub use sidebar::{SidebarEntry, SidebarUpdate};
