//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, every webview surface, and the controller
//! state they report into.

mod core;
mod event_handler;
mod init;
mod polling;
mod shell_state;
mod shutdown;
mod title;
mod types;
mod webview_bridge;

pub use core::ChattyApp;
