//! GPU rendering subsystem.
//!
//! Each renderer owns its pipeline and buffers and records passes into a
//! shared [`RenderTarget`]. Construction is fallible: a renderer only exists
//! once its shaders compiled and linked, so a half-built renderer cannot be
//! asked to draw.
//!
//! Convention:
//! - Triangle geometry is authored directly in NDC.
//! - Swatch geometry is in logical pixels (top-left origin, +Y down); the
//!   vertex shader converts to NDC using a viewport uniform.

mod common;
mod ctx;
pub mod swatch;
pub mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use swatch::{SwatchInstance, SwatchRenderer};
pub use triangle::TriangleRenderer;
