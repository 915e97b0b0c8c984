//! Coordinate and color types shared across the renderers and the app.
//!
//! Canonical CPU space for UI geometry (the swatch row):
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The triangle itself is authored directly in normalized device coordinates
//! and bypasses the logical-pixel space entirely.

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
