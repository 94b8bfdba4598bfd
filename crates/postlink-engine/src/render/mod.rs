pub mod context;
pub mod markup;

pub use context::RenderContext;
pub use markup::{anchor, break_lines, permalink};
