use egui::{Pos2, Rect, Response, Vec2, pos2};

/// Pointer events on the drawing surface, in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the surface
    PointerDown { pos: Pos2 },
    /// Pointer moved while the button is held
    PointerMove { pos: Pos2 },
    /// Primary button released
    PointerUp { pos: Pos2 },
}

/// Map a screen position inside `canvas_rect` to surface pixels.
///
/// The canvas may be displayed at a different size than the surface, so the
/// position is scaled accordingly. Positions outside the rect are not clamped.
pub fn to_surface(pos: Pos2, canvas_rect: Rect, surface_size: Vec2) -> Pos2 {
    let local = pos - canvas_rect.min;
    let scale_x = if canvas_rect.width() > 0.0 {
        surface_size.x / canvas_rect.width()
    } else {
        1.0
    };
    let scale_y = if canvas_rect.height() > 0.0 {
        surface_size.y / canvas_rect.height()
    } else {
        1.0
    };
    pos2(local.x * scale_x, local.y * scale_y)
}

/// Turns egui drag responses on the canvas into `InputEvent`s.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the canvas response for this frame.
    pub fn process(&mut self, response: &Response, canvas_rect: Rect, surface_size: Vec2) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let map = |pos: Pos2| to_surface(pos, canvas_rect, surface_size);

        if response.drag_started_by(egui::PointerButton::Primary) {
            let origin = response
                .ctx
                .input(|i| i.pointer.press_origin())
                .or(response.interact_pointer_pos());
            if let Some(origin) = origin {
                let pos = map(origin);
                events.push(InputEvent::PointerDown { pos });
                self.last_pos = Some(pos);
            }
        }

        if self.last_pos.is_some() {
            if let Some(screen_pos) = response.interact_pointer_pos() {
                let pos = map(screen_pos);
                if Some(pos) != self.last_pos {
                    events.push(InputEvent::PointerMove { pos });
                    self.last_pos = Some(pos);
                }
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            if let Some(pos) = self.last_pos.take() {
                events.push(InputEvent::PointerUp { pos });
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_to_surface_at_native_size() {
        let rect = Rect::from_min_size(pos2(100.0, 50.0), vec2(700.0, 600.0));
        let pos = to_surface(pos2(110.0, 70.0), rect, vec2(700.0, 600.0));
        assert_eq!(pos, pos2(10.0, 20.0));
    }

    #[test]
    fn test_to_surface_scales_with_display_size() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(350.0, 300.0));
        let pos = to_surface(pos2(175.0, 150.0), rect, vec2(700.0, 600.0));
        assert_eq!(pos, pos2(350.0, 300.0));
    }

    #[test]
    fn test_to_surface_outside_rect_is_not_clamped() {
        let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(700.0, 600.0));
        let pos = to_surface(pos2(0.0, 0.0), rect, vec2(700.0, 600.0));
        assert_eq!(pos, pos2(-10.0, -10.0));
    }
}
