//! Markup Renderer Port - Converts model markdown into HTML.

/// Port for markdown to HTML conversion.
pub trait MarkupRenderer: Send + Sync {
    fn to_html(&self, markdown: &str) -> String;
}
