//! Labels file loader for exported image classifiers.
//!
//! Model exports ship a `labels.txt` beside the weights with one
//! `<id> <label>` entry per line, e.g. `0 Cardboard-Biodegradable`.

use std::path::Path;

use crate::domain::foundation::ValidationError;
use crate::domain::waste::WasteLabels;

#[derive(Debug, thiserror::Error)]
pub enum LabelsFileError {
    #[error("Failed to read labels file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid labels file: {0}")]
    Invalid(#[from] ValidationError),
}

/// Reads and parses a labels file.
pub async fn load_labels_file(path: &Path) -> Result<WasteLabels, LabelsFileError> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(WasteLabels::parse(&content)?)
}

/// Loads labels from `path`, keeping the built-in table when no path is
/// given or the file cannot be used.
pub async fn load_labels_or_default(path: Option<&Path>) -> WasteLabels {
    let Some(path) = path else {
        return WasteLabels::default();
    };

    match load_labels_file(path).await {
        Ok(labels) => {
            tracing::info!(path = %path.display(), count = labels.len(), "Loaded waste labels");
            labels
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Using built-in waste labels");
            WasteLabels::default()
        }
    }
}
