//! Question Catalog - The fixed sustainability questionnaire.
//!
//! Twenty yes/no questions in four weighted categories. The catalog is
//! immutable; answers live in [`AnswerSet`](super::AnswerSet).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Penalty applied for each critical question answered "No".
pub const CRITICAL_PENALTY: u8 = 5;

/// Number of questions in every category.
pub const QUESTIONS_PER_CATEGORY: usize = 5;

/// One of the four scored sustainability areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    EnergyEfficiency,
    WaterConservation,
    WasteManagement,
    MaterialSustainability,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 4] = [
        Category::EnergyEfficiency,
        Category::WaterConservation,
        Category::WasteManagement,
        Category::MaterialSustainability,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::EnergyEfficiency => "Energy Efficiency",
            Category::WaterConservation => "Water Conservation",
            Category::WasteManagement => "Waste Management",
            Category::MaterialSustainability => "Material Sustainability",
        }
    }

    /// Fraction of the overall score attributable to this category.
    pub fn weight(&self) -> f64 {
        match self {
            Category::EnergyEfficiency => 0.30,
            Category::WaterConservation => 0.25,
            Category::WasteManagement => 0.25,
            Category::MaterialSustainability => 0.20,
        }
    }

    /// Icon shown next to the category heading.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::EnergyEfficiency => "⚡",
            Category::WaterConservation => "💧",
            Category::WasteManagement => "♻️",
            Category::MaterialSustainability => "🌿",
        }
    }

    /// Questions belonging to this category, in catalog order.
    pub fn questions(&self) -> impl Iterator<Item = &'static Question> {
        let category = *self;
        QUESTIONS.iter().filter(move |q| q.category == category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single yes/no questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Question {
    /// Stable identifier, e.g. `energy-1`.
    pub id: &'static str,
    /// Question text as shown to the user.
    pub text: &'static str,
    pub category: Category,
    /// Answering "No" costs an extra [`CRITICAL_PENALTY`] points.
    pub critical: bool,
}

const fn q(id: &'static str, text: &'static str, category: Category, critical: bool) -> Question {
    Question {
        id,
        text,
        category,
        critical,
    }
}

/// The complete questionnaire.
pub static QUESTIONS: [Question; 20] = [
    q("energy-1", "Does your building use LED lighting throughout?", Category::EnergyEfficiency, true),
    q("energy-2", "Is your building well-insulated (walls, attic, basement)?", Category::EnergyEfficiency, true),
    q("energy-3", "Do you have a programmable or smart thermostat?", Category::EnergyEfficiency, false),
    q("energy-4", "Does your building use solar panels or renewable energy?", Category::EnergyEfficiency, false),
    q("energy-5", "Are your windows energy-efficient (double/triple-pane)?", Category::EnergyEfficiency, false),
    q("water-1", "Does your building have low-flow showerheads and faucets?", Category::WaterConservation, false),
    q("water-2", "Do you use dual-flush or low-flow toilets?", Category::WaterConservation, false),
    q("water-3", "Is there a rainwater harvesting system in place?", Category::WaterConservation, true),
    q("water-4", "Does your landscaping use drought-resistant plants?", Category::WaterConservation, false),
    q("water-5", "Are there systems in place to quickly detect and fix leaks?", Category::WaterConservation, false),
    q("waste-1", "Is there a comprehensive recycling program?", Category::WasteManagement, true),
    q("waste-2", "Do you compost organic waste?", Category::WasteManagement, false),
    q("waste-3", "Are there efforts to reduce packaging waste?", Category::WasteManagement, false),
    q("waste-4", "Do you donate or repurpose items instead of discarding?", Category::WasteManagement, false),
    q("waste-5", "Are reusable materials prioritized over single-use items?", Category::WasteManagement, false),
    q("materials-1", "Are building materials made from recycled content?", Category::MaterialSustainability, false),
    q("materials-2", "Do you use locally-sourced building materials?", Category::MaterialSustainability, false),
    q("materials-3", "Are low-VOC paints and finishes used throughout?", Category::MaterialSustainability, false),
    q("materials-4", "Is sustainable flooring (bamboo, cork, reclaimed wood) installed?", Category::MaterialSustainability, false),
    q("materials-5", "Are furniture and fixtures made from sustainable materials?", Category::MaterialSustainability, false),
];

/// Read-only access to the questionnaire.
pub struct Catalog;

impl Catalog {
    /// All questions in catalog order.
    pub fn questions() -> &'static [Question] {
        &QUESTIONS
    }

    /// Total number of questions.
    pub fn len() -> usize {
        QUESTIONS.len()
    }

    /// Looks a question up by id or by exact text.
    pub fn find(key: &str) -> Option<&'static Question> {
        let key = key.trim();
        QUESTIONS.iter().find(|q| q.id == key || q.text == key)
    }

    /// The critical subset: lighting, insulation, rainwater harvesting, recycling.
    pub fn critical() -> impl Iterator<Item = &'static Question> {
        QUESTIONS.iter().filter(|q| q.critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let total: f64 = Category::ALL.iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_category_has_five_questions() {
        for category in Category::ALL {
            assert_eq!(category.questions().count(), QUESTIONS_PER_CATEGORY);
        }
        assert_eq!(Catalog::len(), 20);
    }

    #[test]
    fn critical_subset_has_four_questions() {
        let ids: Vec<_> = Catalog::critical().map(|q| q.id).collect();
        assert_eq!(ids, vec!["energy-1", "energy-2", "water-3", "waste-1"]);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = QUESTIONS.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn find_accepts_id_or_text() {
        let by_id = Catalog::find("water-3").unwrap();
        let by_text = Catalog::find("Is there a rainwater harvesting system in place?").unwrap();
        assert_eq!(by_id, by_text);
        assert!(by_id.critical);
        assert!(Catalog::find("Do you own a yacht?").is_none());
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::MaterialSustainability).unwrap();
        assert_eq!(json, "\"material_sustainability\"");
    }
}
