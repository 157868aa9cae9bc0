//! Waste classes produced by the image classifier.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Prompt sent with each waste photo.
pub const WASTE_PROMPT: &str = "\
Analyze the image of the waste item and provide the following in Markdown format:
1. A title identifying the item, prefixed with \"## \".
2. A \"Classification\" heading, prefixed with \"### \". Classify the item into one of these categories: Recyclable, Organic Waste, E-Waste, or General Waste.
3. A \"How to Dispose\" heading, prefixed with \"### \". Provide a bulleted list of actionable tips for proper disposal or recycling.
4. A \"Environmental Tip\" heading, prefixed with \"### \". Give a short, encouraging tip related to reducing this type of waste.
";

pub const NO_IMAGE_MESSAGE: &str = "No image selected. Please upload an image file.";

pub const INVALID_KEY_MESSAGE: &str =
    "The configured Gemini API key is invalid. Please check your .env file.";

/// User-facing text for a failed guidance request.
pub fn guidance_failure_message(details: &str) -> String {
    format!(
        "An error occurred while processing the image. The API may be unavailable or the image may be invalid. Details: {}",
        details
    )
}

/// Label for any class id missing from the table.
pub const UNKNOWN_WASTE_TYPE: &str = "Unknown Waste Type";

const DEFAULT_LABELS: [(u32, &str); 14] = [
    (0, "Unknown/None"),
    (1, "Cardboard-Biodegradable"),
    (2, "Glass-Solid Waste"),
    (3, "Footwear-Textile waste"),
    (4, "Clothes-Textile waste"),
    (5, "Metal-Non-Biodegradable"),
    (6, "Paper-Biodegradable"),
    (7, "Battery-Hazardous"),
    (8, "Organic Waste-Biodegradable"),
    (9, "Toothbrush-Non-Biodegradable"),
    (10, "Diaper/Pads-Rejected Waste"),
    (11, "Mask-Household waste"),
    (12, "Plastic-Non-biodegradable"),
    (13, "Phone-E-waste"),
];

/// Class id to human label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasteLabels {
    labels: BTreeMap<u32, String>,
}

impl Default for WasteLabels {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS
                .iter()
                .map(|(id, label)| (*id, (*label).to_string()))
                .collect(),
        }
    }
}

impl WasteLabels {
    /// Parses a `labels.txt` file with one `<id> <label>` entry per line.
    ///
    /// Blank lines are skipped.
    pub fn parse(content: &str) -> Result<Self, ValidationError> {
        let mut labels = BTreeMap::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (id, label) = line.split_once(char::is_whitespace).ok_or_else(|| {
                ValidationError::invalid_format(
                    "labels",
                    format!("line {}: expected '<id> <label>'", line_no + 1),
                )
            })?;
            let id: u32 = id.parse().map_err(|_| {
                ValidationError::invalid_format(
                    "labels",
                    format!("line {}: '{}' is not a class id", line_no + 1, id),
                )
            })?;
            labels.insert(id, label.trim().to_string());
        }

        if labels.is_empty() {
            return Err(ValidationError::empty_field("labels"));
        }
        Ok(Self { labels })
    }

    /// Label for a class id, falling back to [`UNKNOWN_WASTE_TYPE`].
    pub fn label(&self, class_id: u32) -> &str {
        self.labels
            .get(&class_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_WASTE_TYPE)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A labelled classifier result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WastePrediction {
    pub class_id: u32,
    pub prediction_text: String,
    pub confidence: Option<f32>,
}

/// Disposal guidance rendered for display next to the uploaded photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WasteGuidance {
    /// Model markdown converted to HTML.
    pub html: String,
    pub image_b64: String,
    pub mime: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_fourteen_classes() {
        let labels = WasteLabels::default();
        assert_eq!(labels.len(), 14);
        assert_eq!(labels.label(7), "Battery-Hazardous");
        assert_eq!(labels.label(13), "Phone-E-waste");
    }

    #[test]
    fn unknown_class_uses_fallback() {
        assert_eq!(WasteLabels::default().label(99), UNKNOWN_WASTE_TYPE);
    }

    #[test]
    fn parses_teachable_machine_labels() {
        let labels = WasteLabels::parse("0 Unknown/None\n1 Cardboard\n\n2  Glass Bottle \n").unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.label(1), "Cardboard");
        assert_eq!(labels.label(2), "Glass Bottle");
        assert_eq!(labels.label(3), UNKNOWN_WASTE_TYPE);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(WasteLabels::parse("zero Unknown").is_err());
        assert!(WasteLabels::parse("7").is_err());
        assert!(WasteLabels::parse("\n\n").is_err());
    }

    #[test]
    fn prompt_asks_for_markdown_sections() {
        assert!(WASTE_PROMPT.contains("## "));
        assert!(WASTE_PROMPT.contains("How to Dispose"));
        assert!(WASTE_PROMPT.contains("Recyclable, Organic Waste, E-Waste, or General Waste"));
    }

    #[test]
    fn failure_message_carries_details() {
        let message = guidance_failure_message("503: overloaded");
        assert!(message.starts_with("An error occurred while processing the image."));
        assert!(message.ends_with("Details: 503: overloaded"));
    }
}
