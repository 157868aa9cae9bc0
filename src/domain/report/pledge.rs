//! Green pledge and the community impact it contributes to.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{Percentage, ValidationError};

/// Maximum accepted length for a pledge name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum accepted length for a free-form pledge.
pub const MAX_CUSTOM_PLEDGE_LEN: usize = 1_000;

/// Text offered for sharing once a pledge is made.
pub const SHARE_TEXT: &str = "I just made my Green Building Pledge with Green Guardian! Join me in building a sustainable future. #GreenGuardian #Sustainability #GreenBuilding";

/// One of the selectable pledge commitments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Commitment {
    Energy,
    Water,
    Waste,
    Materials,
    Education,
    Monitoring,
}

impl Commitment {
    pub const ALL: [Commitment; 6] = [
        Commitment::Energy,
        Commitment::Water,
        Commitment::Waste,
        Commitment::Materials,
        Commitment::Education,
        Commitment::Monitoring,
    ];

    pub fn text(&self) -> &'static str {
        match self {
            Commitment::Energy => "⚡ I commit to improving energy efficiency in my building",
            Commitment::Water => "💧 I commit to implementing water conservation measures",
            Commitment::Waste => "♻️ I commit to better waste management and recycling",
            Commitment::Materials => "🌿 I commit to using sustainable building materials",
            Commitment::Education => "📚 I commit to educating others about green building practices",
            Commitment::Monitoring => "📊 I commit to regularly monitoring my environmental impact",
        }
    }
}

/// A validated pledge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pledge {
    name: String,
    commitments: BTreeSet<Commitment>,
    custom_pledge: Option<String>,
}

impl Pledge {
    /// Validates and builds a pledge.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank name or no commitments
    /// - `OutOfRange` when the name or custom text is too long
    pub fn new(
        name: impl AsRef<str>,
        commitments: impl IntoIterator<Item = Commitment>,
        custom_pledge: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let name_len = name.chars().count();
        if name_len > MAX_NAME_LEN {
            return Err(ValidationError::out_of_range(
                "name",
                1,
                MAX_NAME_LEN as i32,
                name_len as i32,
            ));
        }

        let commitments: BTreeSet<_> = commitments.into_iter().collect();
        if commitments.is_empty() {
            return Err(ValidationError::empty_field("commitments"));
        }

        let custom_pledge = custom_pledge
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        if let Some(text) = &custom_pledge {
            let len = text.chars().count();
            if len > MAX_CUSTOM_PLEDGE_LEN {
                return Err(ValidationError::out_of_range(
                    "custom_pledge",
                    0,
                    MAX_CUSTOM_PLEDGE_LEN as i32,
                    len as i32,
                ));
            }
        }

        Ok(Self {
            name: name.to_string(),
            commitments,
            custom_pledge,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn commitments(&self) -> impl Iterator<Item = Commitment> + '_ {
        self.commitments.iter().copied()
    }

    pub fn custom_pledge(&self) -> Option<&str> {
        self.custom_pledge.as_deref()
    }

    /// Download name: spaces become underscores, lowercased.
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "green_guardian_certificate_{}.{}",
            self.name.replace(' ', "_").to_lowercase(),
            extension
        )
    }
}

/// Running totals shown on the pledge page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CommunityImpact {
    pub pledges_made: u32,
    /// Tons, one decimal.
    pub co2_reduced: f64,
    pub buildings_improved: u32,
}

impl CommunityImpact {
    /// CO2 credited for a pledge at the given score.
    pub fn co2_for(score: Percentage) -> f64 {
        (f64::from(score.value()) * 0.1 * 10.0).round() / 10.0
    }

    pub fn record_pledge(&mut self, score: Percentage) {
        self.pledges_made += 1;
        self.co2_reduced = ((self.co2_reduced + Self::co2_for(score)) * 10.0).round() / 10.0;
        self.buildings_improved += 1;
    }
}
