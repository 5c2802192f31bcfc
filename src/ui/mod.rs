pub mod renderer;
pub mod span;
pub mod style;
pub mod view;

pub use renderer::{CursorPos, RenderFrame, Renderer};
pub use view::{OutcomeView, RenderView};
