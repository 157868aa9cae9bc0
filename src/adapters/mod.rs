//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Vision providers (Gemini, mock)
//! - `classifier` - Waste classifiers (model server, mock)
//! - `document` - Markdown rendering
//! - `storage` - Session storage
//! - `http` - REST API

pub mod ai;
pub mod classifier;
pub mod document;
pub mod http;
pub mod storage;

pub use ai::{GeminiConfig, GeminiVisionProvider, MockVisionProvider};
pub use classifier::{MockWasteClassifier, RemoteClassifierConfig, RemoteWasteClassifier};
pub use document::PulldownMarkupRenderer;
pub use storage::InMemorySessionStore;
