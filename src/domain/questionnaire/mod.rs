//! Questionnaire Module - Building sustainability evaluation.
//!
//! # Components
//!
//! - `Catalog` - The fixed 20-question, 4-category questionnaire
//! - `AnswerSet` - Per-session yes/no answers
//! - `ScoreCalculator` - Weighted score with critical-question penalties
//! - `recommendations` - Building-specific tips for missed questions
//!
//! Everything here is pure; session lifetime is handled by the
//! `SessionStore` port.

mod answers;
mod building;
mod catalog;
mod score;
mod tips;

pub use answers::{AnswerSet, MissedItem};
pub use building::BuildingType;
pub use catalog::{
    Catalog, Category, Question, CRITICAL_PENALTY, QUESTIONS, QUESTIONS_PER_CATEGORY,
};
pub use score::{CategoryScore, ScoreBand, ScoreBreakdown, ScoreCalculator};
pub use tips::{
    recommendations, tip_for, CategoryRecommendations, Recommendation, GENERAL_TIPS,
    INNOVATION_TIPS, MAINTENANCE_TIPS,
};
