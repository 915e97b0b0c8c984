//! Shader compilation and pipeline linking with captured driver logs.
//!
//! wgpu reports validation failures through error scopes rather than return
//! values. The builders here wrap module and pipeline creation in a scope so
//! a broken shader surfaces as a [`ShaderError`] carrying the driver log,
//! instead of an uncaptured error killing the process later.

mod builder;
mod error;

pub use builder::{compile, link, LinkDesc};
pub use error::{ShaderError, ShaderStage};
