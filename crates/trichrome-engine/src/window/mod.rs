//! Windowing and event-loop runtime built on winit.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
