//! Trichrome engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the trichrome
//! application: context acquisition, shader compilation and linking, the
//! triangle and swatch renderers, and the single-window event runtime.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod shader;
pub mod render;
