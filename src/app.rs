use crate::board::Board;
use crate::input::{CanvasEvent, InputHandler};
use crate::renderer::Renderer;
use egui::{Sense, Vec2};

/// Logical size of the drawing surface in points
const CANVAS_SIZE: Vec2 = Vec2::new(400.0, 300.0);

/// The one component owning all behavior: input capture, drawing
/// state, rendering, and the Undo/Clear controls.
#[derive(Default)]
pub struct BlackboardApp {
    board: Board,
    renderer: Renderer,
    // Created on the first frame, once the canvas rect is known
    input: Option<InputHandler>,
}

impl BlackboardApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }
}

impl eframe::App for BlackboardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Blackboard Drawing");
                ui.add_space(8.0);

                let (response, painter) = ui.allocate_painter(CANVAS_SIZE, Sense::drag());
                let canvas_rect = response.rect;

                let input = self
                    .input
                    .get_or_insert_with(|| InputHandler::new(canvas_rect));
                input.set_canvas_rect(canvas_rect);
                let events = input.process_input(ctx);

                // Apply this frame's gestures before painting, so the
                // paint below always reflects the latest state
                for event in events {
                    match event {
                        CanvasEvent::Begin(pos) => self.board.begin(pos),
                        CanvasEvent::Extend(pos) => self.board.extend(pos),
                        CanvasEvent::End => self.board.end(),
                    }
                }

                self.renderer.paint(&painter, canvas_rect, &self.board);

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Undo").clicked() {
                        log::info!("undo requested");
                        self.board.undo();
                    }
                    if ui.button("Clear").clicked() {
                        log::info!("clear requested");
                        self.board.clear();
                        // Show the blank surface immediately, without
                        // waiting for the next input event
                        ctx.request_repaint();
                    }
                });
            });
        });
    }
}
