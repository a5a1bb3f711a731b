use winit::event::{ElementState, MouseButton, WindowEvent};

/// Map a cursor pixel position to normalized device coordinates.
///
/// Pixel origin is top-left, NDC origin is the window center with Y up, so
/// (0,0) maps to (-1,1) and (width,height) maps to (1,-1).
pub fn cursor_to_ndc(x_px: f32, y_px: f32, width: f32, height: f32) -> (f32, f32) {
    let x_ndc = 2.0 * (x_px / width) - 1.0;
    let y_ndc = -2.0 * (y_px / height) + 1.0;
    (x_ndc, y_ndc)
}

/// Per-frame drag tracking for the left mouse button.
///
/// Events update the current cursor/button state; `frame_delta` is sampled
/// once per frame and yields a translation only when the button was held in
/// both the previous and current frame, so the initial press frame never
/// causes a jump.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Latest cursor position in pixels, if the cursor has entered the window
    cursor_px: Option<(f32, f32)>,
    /// Left button state as of the latest event
    pressed: bool,
    /// Cursor NDC at the previous frame sample
    prev_ndc: Option<(f32, f32)>,
    /// Button state at the previous frame sample
    prev_pressed: bool,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a winit window event into the drag state.
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.on_button(*state == ElementState::Pressed);
            }
            // Scroll is received but has no effect: zoom is out of scope.
            WindowEvent::MouseWheel { .. } => {}
            _ => {}
        }
    }

    pub fn on_cursor_moved(&mut self, x_px: f32, y_px: f32) {
        self.cursor_px = Some((x_px, y_px));
    }

    pub fn on_button(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Sample the drag once per frame.
    ///
    /// Returns the NDC delta to apply to the quad, or `None` when the button
    /// was not held across this and the previous frame. Advances the
    /// previous-frame snapshot either way.
    pub fn frame_delta(&mut self, width: f32, height: f32) -> Option<(f32, f32)> {
        let current = self
            .cursor_px
            .map(|(x, y)| cursor_to_ndc(x, y, width, height));

        let delta = match (self.prev_pressed && self.pressed, self.prev_ndc, current) {
            (true, Some(prev), Some(cur)) => Some((cur.0 - prev.0, cur.1 - prev.1)),
            _ => None,
        };

        self.prev_ndc = current;
        self.prev_pressed = self.pressed;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 1280.0;
    const H: f32 = 720.0;

    #[test]
    fn test_cursor_to_ndc_corners() {
        assert_eq!(cursor_to_ndc(0.0, 0.0, W, H), (-1.0, 1.0));
        assert_eq!(cursor_to_ndc(W, H, W, H), (1.0, -1.0));
        assert_eq!(cursor_to_ndc(W / 2.0, H / 2.0, W, H), (0.0, 0.0));
    }

    #[test]
    fn test_new_state_yields_no_delta() {
        let mut drag = DragState::new();
        assert_eq!(drag.frame_delta(W, H), None);
    }

    #[test]
    fn test_press_frame_is_a_no_op() {
        let mut drag = DragState::new();
        drag.on_cursor_moved(640.0, 360.0);
        drag.frame_delta(W, H);

        // Button goes down; the first held frame must not translate.
        drag.on_button(true);
        drag.on_cursor_moved(740.0, 360.0);
        assert_eq!(drag.frame_delta(W, H), None);
    }

    #[test]
    fn test_held_drag_yields_delta() {
        let mut drag = DragState::new();
        drag.on_button(true);
        drag.on_cursor_moved(640.0, 360.0);
        drag.frame_delta(W, H);

        // Second held frame: cursor moved a quarter window right.
        drag.on_cursor_moved(960.0, 360.0);
        let (dx, dy) = drag.frame_delta(W, H).expect("held drag must translate");
        assert!((dx - 0.5).abs() < 1e-6);
        assert_eq!(dy, 0.0);
    }

    #[test]
    fn test_release_stops_translation() {
        let mut drag = DragState::new();
        drag.on_button(true);
        drag.on_cursor_moved(640.0, 360.0);
        drag.frame_delta(W, H);

        drag.on_button(false);
        drag.on_cursor_moved(700.0, 360.0);
        assert_eq!(drag.frame_delta(W, H), None);

        // Still released on later frames.
        drag.on_cursor_moved(800.0, 400.0);
        assert_eq!(drag.frame_delta(W, H), None);
    }
}
