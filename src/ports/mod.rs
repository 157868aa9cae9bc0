//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `VisionProvider` - Hosted image-understanding model (Gemini)
//! - `WasteClassifier` - Pre-trained waste image classifier
//! - `SessionStore` - Dashboard session storage
//! - `MarkupRenderer` - Markdown to HTML conversion

mod markup_renderer;
mod session_store;
mod vision_provider;
mod waste_classifier;

pub use markup_renderer::MarkupRenderer;
pub use session_store::{SessionStore, SessionStoreError};
pub use vision_provider::{VisionError, VisionProvider, VisionRequest, VisionResponse};
pub use waste_classifier::{ClassifierError, Prediction, WasteClassifier};
