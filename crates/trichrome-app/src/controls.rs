//! Color triggers and the swatch panel layout.
//!
//! A trigger is one selectable fill color. The panel lays the three swatches
//! out as a centered row above the bottom edge of the window and answers hit
//! tests against it. Layout is recomputed from the viewport on demand, so
//! there is no cached geometry to invalidate on resize.

use trichrome_engine::coords::{ColorRgba, Rect, Vec2, Viewport};
use trichrome_engine::render::SwatchInstance;

/// Swatch row metrics (logical px).
const SWATCH_WIDTH: f32 = 64.0;
const SWATCH_HEIGHT: f32 = 28.0;
const SWATCH_GAP: f32 = 12.0;
const BOTTOM_MARGIN: f32 = 16.0;

/// One selectable fill color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trigger {
    SelectRed,
    SelectGreen,
    SelectBlue,
}

/// Single source of truth mapping each trigger to its fill color.
const TRIGGER_BINDINGS: [(Trigger, ColorRgba); 3] = [
    (Trigger::SelectRed, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
    (Trigger::SelectGreen, ColorRgba::new(0.0, 1.0, 0.0, 1.0)),
    (Trigger::SelectBlue, ColorRgba::new(0.0, 0.0, 1.0, 1.0)),
];

impl Trigger {
    pub const ALL: [Trigger; 3] = [Trigger::SelectRed, Trigger::SelectGreen, Trigger::SelectBlue];

    /// Stable name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Trigger::SelectRed => "select-red",
            Trigger::SelectGreen => "select-green",
            Trigger::SelectBlue => "select-blue",
        }
    }

    /// Fill color this trigger selects.
    pub fn color(self) -> ColorRgba {
        TRIGGER_BINDINGS
            .iter()
            .find(|(t, _)| *t == self)
            .map(|(_, c)| *c)
            .expect("every trigger has a binding")
    }
}

/// A laid-out swatch: its trigger and hit/draw rectangle.
#[derive(Debug, Copy, Clone)]
pub struct Swatch {
    pub trigger: Trigger,
    pub rect: Rect,
}

/// The row of color swatches along the bottom edge.
#[derive(Debug, Copy, Clone)]
pub struct SwatchPanel {
    swatches: [Swatch; 3],
}

impl SwatchPanel {
    /// Lays out the row for the given viewport: one swatch per trigger, in
    /// `Trigger::ALL` order from left to right, centered horizontally.
    pub fn layout(viewport: Viewport) -> Self {
        let count = Trigger::ALL.len() as f32;
        let row_width = count * SWATCH_WIDTH + (count - 1.0) * SWATCH_GAP;
        let x0 = (viewport.width - row_width) / 2.0;
        let y = viewport.height - BOTTOM_MARGIN - SWATCH_HEIGHT;

        let mut swatches = [Swatch {
            trigger: Trigger::SelectRed,
            rect: Rect::default(),
        }; 3];

        for (i, trigger) in Trigger::ALL.into_iter().enumerate() {
            let x = x0 + i as f32 * (SWATCH_WIDTH + SWATCH_GAP);
            swatches[i] = Swatch {
                trigger,
                rect: Rect::new(x, y, SWATCH_WIDTH, SWATCH_HEIGHT),
            };
        }

        Self { swatches }
    }

    /// Trigger under `pos`, if any.
    pub fn trigger_at(&self, pos: Vec2) -> Option<Trigger> {
        self.swatches
            .iter()
            .find(|s| s.rect.contains(pos))
            .map(|s| s.trigger)
    }

    /// Draw data for every swatch, tinted with its trigger color.
    pub fn instances(&self) -> [SwatchInstance; 3] {
        self.swatches
            .map(|s| SwatchInstance::new(s.rect, s.trigger.color()))
    }

    pub fn swatches(&self) -> &[Swatch; 3] {
        &self.swatches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── triggers ──────────────────────────────────────────────────────────

    #[test]
    fn every_trigger_has_a_color() {
        for t in Trigger::ALL {
            assert!(t.color().is_finite());
        }
    }

    #[test]
    fn trigger_colors_are_pure_channels() {
        assert_eq!(Trigger::SelectRed.color(), ColorRgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Trigger::SelectGreen.color(), ColorRgba::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(Trigger::SelectBlue.color(), ColorRgba::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn trigger_names_are_stable() {
        assert_eq!(Trigger::SelectRed.name(), "select-red");
        assert_eq!(Trigger::SelectGreen.name(), "select-green");
        assert_eq!(Trigger::SelectBlue.name(), "select-blue");
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn row_is_centered_and_above_bottom_edge() {
        let panel = SwatchPanel::layout(Viewport::new(640.0, 480.0));
        let first = panel.swatches()[0].rect;
        let last = panel.swatches()[2].rect;

        // 3 * 64 + 2 * 12 = 216 wide, so the row starts at (640 - 216) / 2.
        assert_eq!(first.origin.x, 212.0);
        assert_eq!(last.origin.x + last.size.x, 428.0);
        assert_eq!(first.origin.y, 480.0 - 16.0 - 28.0);
    }

    #[test]
    fn swatches_run_left_to_right_in_trigger_order() {
        let panel = SwatchPanel::layout(Viewport::new(640.0, 480.0));
        let s = panel.swatches();
        assert_eq!(s[0].trigger, Trigger::SelectRed);
        assert_eq!(s[1].trigger, Trigger::SelectGreen);
        assert_eq!(s[2].trigger, Trigger::SelectBlue);
        assert!(s[0].rect.origin.x < s[1].rect.origin.x);
        assert!(s[1].rect.origin.x < s[2].rect.origin.x);
    }

    #[test]
    fn hit_test_finds_each_swatch_center() {
        let panel = SwatchPanel::layout(Viewport::new(640.0, 480.0));
        for s in panel.swatches() {
            assert_eq!(panel.trigger_at(s.rect.center()), Some(s.trigger));
        }
    }

    #[test]
    fn hit_test_misses_outside_the_row() {
        let panel = SwatchPanel::layout(Viewport::new(640.0, 480.0));
        assert_eq!(panel.trigger_at(Vec2::new(320.0, 100.0)), None);
        assert_eq!(panel.trigger_at(Vec2::new(10.0, 450.0)), None);
    }

    #[test]
    fn gap_between_swatches_is_dead_space() {
        let panel = SwatchPanel::layout(Viewport::new(640.0, 480.0));
        let first = panel.swatches()[0].rect;
        let between = Vec2::new(first.origin.x + first.size.x + SWATCH_GAP / 2.0, first.center().y);
        assert_eq!(panel.trigger_at(between), None);
    }
}
