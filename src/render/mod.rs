pub mod canvas;
pub mod renderer;

pub use canvas::{Canvas, Font, Rgb, paint};
pub use renderer::{Renderer, TerminalCanvas};
