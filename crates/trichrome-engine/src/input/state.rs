use crate::input::types::InputEvent;

/// Pointer state accumulated across events.
///
/// The position is `None` until the pointer first enters the window and
/// again after it leaves, so stale coordinates are never reported.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position in logical pixels, if the pointer is
    /// inside the window.
    pub fn pointer_pos(&self) -> Option<(f32, f32)> {
        self.pointer_pos
    }

    /// Folds one event into the state.
    pub fn apply_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerMoved(m) => {
                self.pointer_pos = Some((m.x, m.y));
            }
            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }
            InputEvent::PointerButton(b) => {
                self.pointer_pos = Some((b.x, b.y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::types::{
        MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
    };

    #[test]
    fn move_updates_position() {
        let mut state = InputState::new();
        assert_eq!(state.pointer_pos(), None);

        state.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 12.0, y: 34.0 }));
        assert_eq!(state.pointer_pos(), Some((12.0, 34.0)));
    }

    #[test]
    fn button_event_stamps_position() {
        let mut state = InputState::new();
        state.apply_event(&InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 5.0,
            y: 6.0,
        }));
        assert_eq!(state.pointer_pos(), Some((5.0, 6.0)));
    }

    #[test]
    fn leave_clears_position() {
        let mut state = InputState::new();
        state.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        state.apply_event(&InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos(), None);
    }
}
