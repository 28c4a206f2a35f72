//! Bridge between the controller state and the webview surfaces.
//!
//! Handles command dispatch, view activation, count aggregation, external
//! links, and keeping surface bounds in step with the window.

mod activation;
mod aggregation;
mod bounds;
mod external;
mod ipc_dispatch;
mod lifecycle;

pub(super) use bounds::{content_rect, sidebar_rect, to_wry_rect};
