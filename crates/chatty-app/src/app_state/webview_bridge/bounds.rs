//! Layout rects for the sidebar and content area, and conversion to wry.

use chatty_common::Rect;

// =============================================================================
// LAYOUT
// =============================================================================

/// Left strip reserved for the sidebar.
pub fn sidebar_rect(viewport: Rect, sidebar_width: f64) -> Rect {
    Rect::new(
        viewport.x,
        viewport.y,
        sidebar_width.min(viewport.width).max(0.0),
        viewport.height,
    )
}

/// Area the active service fills: the viewport minus the sidebar.
pub fn content_rect(viewport: Rect, sidebar_width: f64) -> Rect {
    let sidebar = sidebar_rect(viewport, sidebar_width);
    Rect::new(
        viewport.x + sidebar.width,
        viewport.y,
        viewport.width - sidebar.width,
        viewport.height,
    )
}

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn to_wry_rect(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================
