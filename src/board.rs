use crate::stroke::{MutableStroke, StrokeRef};
use egui::Pos2;

/// All drawing state: the committed strokes plus the stroke currently
/// being drawn. Mutated only from the UI thread, one event at a time.
///
/// Every operation is total; conditions like "no gesture active" are
/// silent no-ops rather than errors.
#[derive(Default)]
pub struct Board {
    current: MutableStroke,
    strokes: Vec<StrokeRef>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            current: MutableStroke::new(),
            strokes: Vec::new(),
        }
    }

    /// Start a new gesture at `pos`, replacing any previous in-progress
    /// stroke.
    pub fn begin(&mut self, pos: Pos2) {
        self.current.reset();
        self.current.add_point(pos);
    }

    /// Continue the active gesture. No-op when no gesture is active.
    pub fn extend(&mut self, pos: Pos2) {
        if self.current.is_empty() {
            return;
        }
        self.current.add_point(pos);
    }

    /// End the active gesture, committing the in-progress stroke.
    /// No-op when no gesture is active.
    pub fn end(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let stroke = self.current.to_stroke_ref();
        log::debug!("committing stroke with {} points", stroke.len());
        self.strokes.push(stroke);
        self.current.reset();
    }

    /// Remove the most recently committed stroke (LIFO). Never touches
    /// the in-progress stroke. No-op on an empty board.
    pub fn undo(&mut self) {
        if let Some(stroke) = self.strokes.pop() {
            log::debug!("undid stroke with {} points", stroke.len());
        }
    }

    /// Drop every committed stroke, active gesture or not. The
    /// in-progress stroke is left alone.
    pub fn clear(&mut self) {
        log::debug!("clearing {} strokes", self.strokes.len());
        self.strokes.clear();
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    /// Points of the in-progress stroke; empty when no gesture is active.
    pub fn current_points(&self) -> &[Pos2] {
        self.current.points()
    }

    pub fn is_drawing(&self) -> bool {
        !self.current.is_empty()
    }
}
