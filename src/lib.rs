#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod board;
pub mod input;
pub mod renderer;
pub mod stroke;

pub use app::BlackboardApp;
pub use board::Board;
pub use input::{CanvasEvent, InputHandler};
pub use renderer::Renderer;
pub use stroke::{MutableStroke, Stroke, StrokeRef};
