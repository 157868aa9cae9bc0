//! Score Calculator - Weighted sustainability score with critical penalties.
//!
//! ```text
//! category_score = yes_count / questions_in_category
//! raw            = round(Σ category_score × weight × 100)
//! penalty        = 5 × critical questions answered "No"
//! score          = clamp(raw − penalty, 0, 100)
//! ```

use serde::Serialize;

use super::answers::AnswerSet;
use super::catalog::{Catalog, Category, CRITICAL_PENALTY};
use crate::domain::foundation::Percentage;

/// Qualitative band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NeedsImprovement,
    Fair,
    Good,
    Excellent,
}

impl ScoreBand {
    /// Band for a score: 80+ excellent, 60+ good, 40+ fair.
    pub fn for_score(score: Percentage) -> Self {
        match score.value() {
            80..=100 => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "🌟",
            ScoreBand::Good => "👍",
            ScoreBand::Fair => "⚠️",
            ScoreBand::NeedsImprovement => "🔧",
        }
    }
}

/// Per-category result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub name: &'static str,
    pub weight: f64,
    pub yes_count: usize,
    pub question_count: usize,
    /// Rounded share of "Yes" answers in this category.
    pub percentage: Percentage,
}

/// Full breakdown of a computed score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: Percentage,
    pub band: ScoreBand,
    /// Weighted score before penalties.
    pub raw: u8,
    pub penalty: u8,
    pub categories: Vec<CategoryScore>,
}

/// Stateless score computations.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Computes the overall 0-100 score.
    pub fn compute(answers: &AnswerSet) -> Percentage {
        let raw = Self::weighted_raw(answers);
        let penalty = Self::penalty(answers);
        Percentage::clamped(i64::from(raw) - i64::from(penalty))
    }

    /// Computes the score together with its components.
    pub fn breakdown(answers: &AnswerSet) -> ScoreBreakdown {
        let score = Self::compute(answers);
        ScoreBreakdown {
            score,
            band: ScoreBand::for_score(score),
            raw: Self::weighted_raw(answers),
            penalty: Self::penalty(answers),
            categories: Self::category_scores(answers),
        }
    }

    /// Fraction of "Yes" answers within one category (0.0 to 1.0).
    pub fn category_fraction(answers: &AnswerSet, category: Category) -> f64 {
        let total = category.questions().count();
        if total == 0 {
            return 0.0;
        }
        answers.yes_count_in(category) as f64 / total as f64
    }

    /// Per-category results in presentation order.
    pub fn category_scores(answers: &AnswerSet) -> Vec<CategoryScore> {
        Category::ALL
            .iter()
            .map(|&category| {
                let yes_count = answers.yes_count_in(category);
                let question_count = category.questions().count();
                CategoryScore {
                    category,
                    name: category.name(),
                    weight: category.weight(),
                    yes_count,
                    question_count,
                    percentage: Percentage::from_ratio(yes_count, question_count),
                }
            })
            .collect()
    }

    /// `round(Σ fraction × weight × 100)`.
    pub fn weighted_raw(answers: &AnswerSet) -> u8 {
        let weighted: f64 = Category::ALL
            .iter()
            .map(|&c| Self::category_fraction(answers, c) * c.weight())
            .sum();
        (weighted * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Five points per critical question not answered "Yes".
    pub fn penalty(answers: &AnswerSet) -> u8 {
        let missed = Catalog::critical().filter(|q| !answers.get(q)).count() as u8;
        missed * CRITICAL_PENALTY
    }
}
