use egui::Pos2;
use std::sync::Arc;

// Immutable committed stroke, shared between board and renderer
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(points: Vec<Pos2>) -> Self {
        Self { points }
    }

    pub fn new_ref(points: Vec<Pos2>) -> StrokeRef {
        Arc::new(Self::new(points))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The stroke currently being drawn. Append-only while a gesture is
/// active; empty means no gesture is active.
#[derive(Default)]
pub struct MutableStroke {
    points: Vec<Pos2>,
}

impl MutableStroke {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    // Add a point to the in-progress stroke
    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    // Convert to a reference-counted StrokeRef for committing
    pub fn to_stroke_ref(&self) -> StrokeRef {
        Stroke::new_ref(self.points.clone())
    }
}
