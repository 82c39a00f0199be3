use crate::board::Board;
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke};

/// Renders the board by redrawing it from scratch: clear the canvas,
/// replay every committed stroke in order, then the in-progress stroke
/// last. Painting is a pure function of the board state, so repainting
/// unchanged state produces identical output.
pub struct Renderer {
    board_color: Color32,
    border_color: Color32,
    border_width: f32,
    chalk_color: Color32,
    chalk_width: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            // Styled after a classroom blackboard with a khaki frame
            board_color: Color32::from_rgb(26, 36, 33),
            border_color: Color32::from_rgb(189, 183, 107),
            border_width: 4.0,
            chalk_color: Color32::WHITE,
            chalk_width: 2.0,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the screen-space polyline for one stroke, or `None` for
    /// strokes with fewer than 2 points (a single tap draws nothing).
    fn stroke_shape(&self, origin: Pos2, points: &[Pos2]) -> Option<Shape> {
        if points.len() < 2 {
            return None;
        }
        let screen_points: Vec<Pos2> = points.iter().map(|p| origin + p.to_vec2()).collect();
        Some(Shape::line(
            screen_points,
            EguiStroke::new(self.chalk_width, self.chalk_color),
        ))
    }

    /// Repaint the whole canvas from the board state.
    pub fn paint(&self, painter: &Painter, rect: Rect, board: &Board) {
        painter.rect_filled(rect, 0.0, self.board_color);

        for stroke in board.strokes() {
            if let Some(shape) = self.stroke_shape(rect.min, stroke.points()) {
                painter.add(shape);
            }
        }
        if let Some(shape) = self.stroke_shape(rect.min, board.current_points()) {
            painter.add(shape);
        }

        painter.rect_stroke(
            rect,
            0.0,
            EguiStroke::new(self.border_width, self.border_color),
        );
    }
}
