//! Pulldown-cmark based markup renderer.
//!
//! Turns the markdown a vision model returns into an HTML fragment that the
//! waste guidance response embeds directly. No document wrapper is added.

use pulldown_cmark::{html, Options, Parser};

use crate::ports::MarkupRenderer;

/// Markup renderer using `pulldown-cmark`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownMarkupRenderer {
    smart_punctuation: bool,
}

impl PulldownMarkupRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Curly quotes and dashes in the output.
    pub fn with_smart_punctuation(mut self) -> Self {
        self.smart_punctuation = true;
        self
    }

    fn options(&self) -> Options {
        let mut options =
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
        if self.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        options
    }
}

impl MarkupRenderer for PulldownMarkupRenderer {
    fn to_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options());

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
