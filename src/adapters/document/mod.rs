//! Document adapters.

mod pulldown_renderer;

pub use pulldown_renderer::PulldownMarkupRenderer;
