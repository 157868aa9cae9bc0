//! Waste handlers - vision-model guidance and classifier labels.

mod classify_waste;
mod predict_waste;

pub use classify_waste::{ClassifyWasteCommand, ClassifyWasteError, ClassifyWasteHandler};
pub use predict_waste::{PredictWasteCommand, PredictWasteError, PredictWasteHandler};
