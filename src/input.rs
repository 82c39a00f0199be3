use egui::{Context, Event, PointerButton, Pos2, Rect};

/// Converts a client-space coordinate to surface-local space, relative
/// to the canvas origin. Pure, so mouse and touch sources share it
/// (egui folds touch contacts into its pointer events, so both arrive
/// here as the same coordinate stream).
pub fn surface_local(origin: Pos2, client: Pos2) -> Pos2 {
    (client - origin).to_pos2()
}

/// A gesture event over the canvas, with positions already normalized
/// to surface-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Gesture started at this point
    Begin(Pos2),
    /// Gesture continued to this point
    Extend(Pos2),
    /// Gesture ended (pointer released or lost)
    End,
}

/// Handles converting raw egui input into canvas gesture events
pub struct InputHandler {
    canvas_rect: Rect,
    drawing: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            drawing: false,
        }
    }

    /// Update the canvas rectangle (e.g. if the window moved)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Translate one raw egui event into a canvas event, tracking
    /// whether a gesture is active. Presses outside the canvas start
    /// nothing; moves are dropped unless a gesture is active and the
    /// pointer is over the canvas; a release anywhere ends the gesture.
    fn translate(&mut self, event: &Event) -> Option<CanvasEvent> {
        match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } => {
                if !self.canvas_rect.contains(*pos) {
                    return None;
                }
                self.drawing = true;
                Some(CanvasEvent::Begin(surface_local(self.canvas_rect.min, *pos)))
            }
            Event::PointerButton {
                button: PointerButton::Primary,
                pressed: false,
                ..
            }
            | Event::PointerGone => {
                if !self.drawing {
                    return None;
                }
                self.drawing = false;
                Some(CanvasEvent::End)
            }
            Event::PointerMoved(pos) => {
                if !self.drawing || !self.canvas_rect.contains(*pos) {
                    return None;
                }
                Some(CanvasEvent::Extend(surface_local(self.canvas_rect.min, *pos)))
            }
            _ => None,
        }
    }

    /// Process this frame's raw input and generate canvas events, in
    /// the order the input device delivered them.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        ctx.input(|input| {
            for event in &input.raw.events {
                if let Some(canvas_event) = self.translate(event) {
                    events.push(canvas_event);
                }
            }
        });
        events
    }
}
