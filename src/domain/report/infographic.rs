use serde::Serialize;

use crate::domain::foundation::Percentage;
use crate::domain::questionnaire::{
    AnswerSet, BuildingType, Category, ScoreBand, ScoreCalculator,
};

/// Score the gauge delta is measured against.
pub const GAUGE_REFERENCE: u8 = 70;

/// Score marked by the gauge threshold line.
pub const GAUGE_THRESHOLD: u8 = 90;

/// Chart-ready view of a completed evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfographicReport {
    pub title: String,
    pub building_type: BuildingType,
    pub score: Percentage,
    pub band: ScoreBand,
    pub band_label: &'static str,
    pub band_emoji: &'static str,
    pub categories: Vec<CategorySeries>,
    pub radar: Vec<RadarPoint>,
    pub gauge: Gauge,
}

/// One category across the bar, pie and target series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub category: Category,
    pub name: &'static str,
    pub score: Percentage,
    /// Target series value; always 100.
    pub ideal: Percentage,
    /// Share of the pie in percent, one decimal.
    pub share: f64,
}

/// A vertex of the performance radar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub category: Category,
    /// Angle in radians, evenly spaced from 0.
    pub angle: f64,
    /// Category score on a 0..=1 scale.
    pub value: f64,
}

/// Gauge indicator for the overall score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub value: Percentage,
    pub reference: u8,
    pub delta: i16,
    pub threshold: u8,
    pub bands: Vec<GaugeBand>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBand {
    pub from: u8,
    pub to: u8,
    pub color: &'static str,
}

impl Gauge {
    fn for_score(value: Percentage) -> Self {
        let bands = [(0, 40, "#FFB6C1"), (40, 60, "#FFFF99"), (60, 80, "#98FB98"), (80, 100, "#32CD32")]
            .into_iter()
            .map(|(from, to, color)| GaugeBand { from, to, color })
            .collect();

        Self {
            value,
            reference: GAUGE_REFERENCE,
            delta: i16::from(value.value()) - i16::from(GAUGE_REFERENCE),
            threshold: GAUGE_THRESHOLD,
            bands,
        }
    }
}

/// Builds infographic data from answers.
pub struct InfographicBuilder;

impl InfographicBuilder {
    pub fn build(answers: &AnswerSet, building_type: BuildingType) -> InfographicReport {
        let breakdown = ScoreCalculator::breakdown(answers);
        let total: u32 = breakdown
            .categories
            .iter()
            .map(|c| u32::from(c.percentage.value()))
            .sum();

        let categories = breakdown
            .categories
            .iter()
            .map(|c| CategorySeries {
                category: c.category,
                name: c.name,
                score: c.percentage,
                ideal: Percentage::HUNDRED,
                share: Self::share(c.percentage, total),
            })
            .collect();

        let step = std::f64::consts::TAU / Category::ALL.len() as f64;
        let radar = breakdown
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| RadarPoint {
                category: c.category,
                angle: step * i as f64,
                value: c.percentage.as_fraction(),
            })
            .collect();

        InfographicReport {
            title: format!("Green Guardian Report - {}", building_type),
            building_type,
            score: breakdown.score,
            band: breakdown.band,
            band_label: breakdown.band.label(),
            band_emoji: breakdown.band.emoji(),
            categories,
            radar,
            gauge: Gauge::for_score(breakdown.score),
        }
    }

    fn share(part: Percentage, total: u32) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (f64::from(part.value()) / f64::from(total) * 1000.0).round() / 10.0
    }
}

#[cfg(test)]
#[path = "infographic_test.rs"]
mod infographic_test;
