use crate::coords::Viewport;
use crate::input::InputEvent;
use crate::render::RenderCtx;
use crate::window::RuntimeCtx;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once after the window and GPU context exist, before the first
    /// frame. Renderer construction belongs here; an error aborts startup.
    fn on_ready(&mut self, ctx: &RenderCtx<'_>) -> anyhow::Result<()>;

    /// Called for each translated input event.
    ///
    /// `viewport` is the current window size in logical pixels, for hit
    /// testing against laid-out controls.
    fn on_input(&mut self, viewport: Viewport, event: &InputEvent, runtime: &mut RuntimeCtx) {
        let _ = (viewport, event, runtime);
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
