//! Room analysis results returned by the vision model.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Prompt sent with each room photo.
pub const ROOM_PROMPT: &str = concat!(
    "You must analyze the provided image of a room and output ONLY valid JSON in the following structure: ",
    "{\"sustainability_score\": <number_1_to_10>, ",
    "\"items\": [{\"name\": \"<item_name>\", \"description\": \"<brief_description_max_10_words>\"}], ",
    "\"greener_alternatives\": [{\"name\": \"<item_name>\", \"alternative\": \"<alternative_suggestion_max_15_words>\"}], ",
    "\"temperature_regulation_suggestions\": [\"<suggestion_max_20_words>\"]}. ",
    "Tasks: 1) Identify all items in the room and describe each briefly (max 10 words). ",
    "2) Provide a sustainability score (1-10). ",
    "3) Suggest greener alternatives for each item (max 15 words per alternative). ",
    "4) Provide ways to improve temperature regulation (max 20 words per suggestion). ",
    "Output strictly valid JSON, no explanations, no extra text. Keep all responses very concise."
);

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json|JSON)?").expect("valid fence pattern"));

static OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid object pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomParseError {
    #[error("No valid JSON object found.")]
    NoJsonObject,

    #[error("Unexpected response format from model: JSON conversion failed.")]
    InvalidJson,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreenerAlternative {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alternative: String,
}

/// Structured room assessment.
///
/// Models drift from the requested shape, so the score accepts numeric
/// strings and keys outside the known set are carried through in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAnalysis {
    /// 1 to 10 as judged by the model. `None` when absent or not numeric.
    #[serde(
        default,
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub sustainability_score: Option<f64>,
    #[serde(default)]
    pub items: Vec<RoomItem>,
    #[serde(default)]
    pub greener_alternatives: Vec<GreenerAlternative>,
    #[serde(default)]
    pub temperature_regulation_suggestions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let score = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(score.filter(|v| v.is_finite()))
}

impl RoomAnalysis {
    /// Parses model output that may be wrapped in markdown fences or prose.
    pub fn from_model_text(text: &str) -> Result<Self, RoomParseError> {
        let json = extract_json(text)?;
        serde_json::from_str(&json).map_err(|_| RoomParseError::InvalidJson)
    }
}

/// Strips code fences and returns the outermost `{...}` span.
pub fn extract_json(text: &str) -> Result<String, RoomParseError> {
    let cleaned = FENCE.replace_all(text, "");
    OBJECT
        .find(cleaned.trim())
        .map(|m| m.as_str().to_string())
        .ok_or(RoomParseError::NoJsonObject)
}

/// Outcome for one uploaded room photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomImageResult {
    pub index: usize,
    pub filename: Option<String>,
    #[serde(flatten)]
    pub outcome: RoomOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RoomOutcome {
    Analysis(RoomAnalysis),
    Error { error: String },
}

impl RoomImageResult {
    pub fn analysed(index: usize, filename: String, analysis: RoomAnalysis) -> Self {
        Self {
            index,
            filename: Some(filename),
            outcome: RoomOutcome::Analysis(analysis),
        }
    }

    pub fn failed(index: usize, filename: Option<String>, error: impl Into<String>) -> Self {
        Self {
            index,
            filename,
            outcome: RoomOutcome::Error {
                error: error.into(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.outcome, RoomOutcome::Error { .. })
    }
}
