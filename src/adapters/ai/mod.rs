//! Vision Provider Adapters.
//!
//! ## Available Adapters
//!
//! - `GeminiVisionProvider` - Google Gemini `generateContent`
//! - `MockVisionProvider` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{
    GeminiConfig, GeminiVisionProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use mock_provider::MockVisionProvider;
