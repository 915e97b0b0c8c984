//! Application state: one triangle, three swatches, pointer-driven color
//! switching.

use anyhow::Context;

use trichrome_engine::coords::{ColorRgba, Vec2, Viewport};
use trichrome_engine::core::{App, AppControl, FrameCtx};
use trichrome_engine::input::{InputEvent, MouseButton, MouseButtonState};
use trichrome_engine::render::{RenderCtx, SwatchRenderer, TriangleRenderer};
use trichrome_engine::window::RuntimeCtx;

use crate::controls::{SwatchPanel, Trigger};

/// Renderers built in `on_ready` once a GPU context exists.
struct Renderers {
    triangle: TriangleRenderer,
    swatches: SwatchRenderer,
}

/// Top-level application.
///
/// Holds the selected trigger as plain state; the GPU side is reconciled at
/// frame time. Everything here is idle between events: a click requests one
/// repaint, and nothing repaints otherwise.
pub struct TriangleApp {
    selected: Trigger,
    renderers: Option<Renderers>,
}

impl TriangleApp {
    pub fn new() -> Self {
        Self {
            selected: Trigger::SelectRed,
            renderers: None,
        }
    }

    /// Currently selected trigger.
    pub fn selected(&self) -> Trigger {
        self.selected
    }

    fn activate(&mut self, trigger: Trigger, runtime: &mut RuntimeCtx) {
        log::debug!("activated {}", trigger.name());
        self.selected = trigger;
        runtime.request_redraw();
    }
}

impl Default for TriangleApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for TriangleApp {
    fn on_ready(&mut self, ctx: &RenderCtx<'_>) -> anyhow::Result<()> {
        let triangle = TriangleRenderer::new(ctx, self.selected.color())
            .context("failed to build triangle renderer")?;
        let swatches =
            SwatchRenderer::new(ctx).context("failed to build swatch renderer")?;

        self.renderers = Some(Renderers { triangle, swatches });
        Ok(())
    }

    fn on_input(&mut self, viewport: Viewport, event: &InputEvent, runtime: &mut RuntimeCtx) {
        let InputEvent::PointerButton(press) = event else {
            return;
        };
        if press.button != MouseButton::Left || press.state != MouseButtonState::Pressed {
            return;
        }

        let panel = SwatchPanel::layout(viewport);
        if let Some(trigger) = panel.trigger_at(Vec2::new(press.x, press.y)) {
            self.activate(trigger, runtime);
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderers) = self.renderers.as_mut() else {
            return AppControl::Continue;
        };
        let selected = self.selected;

        ctx.render(ColorRgba::black(), |rctx, target| {
            renderers.triangle.set_color(selected.color());
            renderers.triangle.draw(rctx, target);

            let panel = SwatchPanel::layout(rctx.viewport);
            renderers.swatches.draw(rctx, target, &panel.instances());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trichrome_engine::input::{PointerButtonEvent, PointerMoveEvent};

    const VIEWPORT: Viewport = Viewport::new(640.0, 480.0);

    fn left_press_at(pos: Vec2) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: pos.x,
            y: pos.y,
        })
    }

    #[test]
    fn click_on_each_swatch_selects_its_trigger() {
        let panel = SwatchPanel::layout(VIEWPORT);

        for s in panel.swatches() {
            let mut app = TriangleApp::new();
            let mut runtime = RuntimeCtx::new();

            app.on_input(VIEWPORT, &left_press_at(s.rect.center()), &mut runtime);

            assert_eq!(app.selected(), s.trigger);
            assert!(runtime.redraw_requested());
        }
    }

    #[test]
    fn click_sequence_ends_red_with_one_redraw_each() {
        let panel = SwatchPanel::layout(VIEWPORT);
        let mut app = TriangleApp::new();
        assert_eq!(app.selected().color(), ColorRgba::new(1.0, 0.0, 0.0, 1.0));

        // (swatch index, expected selection, expected fill)
        let sequence = [
            (2, Trigger::SelectBlue, ColorRgba::new(0.0, 0.0, 1.0, 1.0)),
            (1, Trigger::SelectGreen, ColorRgba::new(0.0, 1.0, 0.0, 1.0)),
            (0, Trigger::SelectRed, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        ];

        for (i, trigger, color) in sequence {
            let mut runtime = RuntimeCtx::new();
            app.on_input(
                VIEWPORT,
                &left_press_at(panel.swatches()[i].rect.center()),
                &mut runtime,
            );

            assert_eq!(app.selected(), trigger);
            assert_eq!(app.selected().color(), color);
            assert!(runtime.redraw_requested());
        }
    }

    #[test]
    fn click_outside_the_panel_changes_nothing() {
        let mut app = TriangleApp::new();
        let mut runtime = RuntimeCtx::new();

        app.on_input(VIEWPORT, &left_press_at(Vec2::new(320.0, 200.0)), &mut runtime);

        assert_eq!(app.selected(), Trigger::SelectRed);
        assert!(!runtime.redraw_requested());
    }

    #[test]
    fn non_left_buttons_are_ignored() {
        let panel = SwatchPanel::layout(VIEWPORT);
        let center = panel.swatches()[1].rect.center();
        let mut app = TriangleApp::new();
        let mut runtime = RuntimeCtx::new();

        app.on_input(
            VIEWPORT,
            &InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
                x: center.x,
                y: center.y,
            }),
            &mut runtime,
        );

        assert_eq!(app.selected(), Trigger::SelectRed);
        assert!(!runtime.redraw_requested());
    }

    #[test]
    fn release_over_a_swatch_does_not_activate() {
        let panel = SwatchPanel::layout(VIEWPORT);
        let center = panel.swatches()[2].rect.center();
        let mut app = TriangleApp::new();
        let mut runtime = RuntimeCtx::new();

        app.on_input(
            VIEWPORT,
            &InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Released,
                x: center.x,
                y: center.y,
            }),
            &mut runtime,
        );

        assert_eq!(app.selected(), Trigger::SelectRed);
        assert!(!runtime.redraw_requested());
    }

    #[test]
    fn pointer_motion_does_not_repaint() {
        let mut app = TriangleApp::new();
        let mut runtime = RuntimeCtx::new();

        app.on_input(
            VIEWPORT,
            &InputEvent::PointerMoved(PointerMoveEvent { x: 320.0, y: 240.0 }),
            &mut runtime,
        );

        assert!(!runtime.redraw_requested());
        assert!(!runtime.exit_requested());
    }

    #[test]
    fn initial_selection_is_red() {
        assert_eq!(TriangleApp::new().selected(), Trigger::SelectRed);
    }
}
