//! Waste Classifier Adapters.
//!
//! - `RemoteWasteClassifier` - Model-server REST predict endpoint
//! - `MockWasteClassifier` - Canned predictions for testing
//! - `load_labels_file` - Class labels exported alongside the model

mod labels_file;
mod mock;
mod remote;

pub use labels_file::{load_labels_file, load_labels_or_default, LabelsFileError};
pub use mock::MockWasteClassifier;
pub use remote::{RemoteClassifierConfig, RemoteWasteClassifier};
