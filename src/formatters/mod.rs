pub mod dot;
pub mod json;
pub mod svg;

pub use dot::DotFormatter;
pub use json::JsonFormatter;
pub use svg::{GraphvizRenderer, Renderer, DEFAULT_DOT_PROGRAM};
