//! Building material comparison table.
//!
//! A fixed catalog of eco-friendly materials and their conventional
//! counterparts, with filtering, sorting and aggregate insights.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    #[serde(rename = "Eco-Friendly")]
    EcoFriendly,
    Conventional,
}

impl MaterialType {
    pub fn label(&self) -> &'static str {
        match self {
            MaterialType::EcoFriendly => "Eco-Friendly",
            MaterialType::Conventional => "Conventional",
        }
    }
}

/// Filter applied to the table; `All` keeps every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialFilter {
    #[default]
    All,
    Only(MaterialType),
}

impl FromStr for MaterialFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "" | "all" => Ok(MaterialFilter::All),
            "ecofriendly" | "eco" => Ok(MaterialFilter::Only(MaterialType::EcoFriendly)),
            "conventional" => Ok(MaterialFilter::Only(MaterialType::Conventional)),
            _ => Err(ValidationError::invalid_format(
                "type",
                "expected All, Eco-Friendly or Conventional",
            )),
        }
    }
}

/// Column to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Material,
    Co2,
    Cost,
    Durability,
    SustainabilityScore,
}

impl SortKey {
    /// Durability and sustainability sort best-first; everything else ascending.
    pub fn ascending(&self) -> bool {
        !matches!(self, SortKey::Durability | SortKey::SustainabilityScore)
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "material" | "name" => Ok(SortKey::Material),
            "co2" | "co2_emissions" | "emissions" => Ok(SortKey::Co2),
            "cost" => Ok(SortKey::Cost),
            "durability" => Ok(SortKey::Durability),
            "sustainability" | "sustainability_score" | "score" => {
                Ok(SortKey::SustainabilityScore)
            }
            _ => Err(ValidationError::invalid_format(
                "sort_by",
                "expected material, co2, cost, durability or sustainability_score",
            )),
        }
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    /// kg CO2 per square metre.
    pub co2_kg_per_m2: u32,
    /// USD per square metre.
    pub cost_per_m2: u32,
    pub durability_years: u32,
    /// 1 to 10.
    pub sustainability_score: u8,
}

const fn m(
    name: &'static str,
    material_type: MaterialType,
    co2_kg_per_m2: u32,
    cost_per_m2: u32,
    durability_years: u32,
    sustainability_score: u8,
) -> Material {
    Material {
        name,
        material_type,
        co2_kg_per_m2,
        cost_per_m2,
        durability_years,
        sustainability_score,
    }
}

use MaterialType::{Conventional as Conv, EcoFriendly as Eco};

pub static MATERIALS: [Material; 20] = [
    m("Bamboo Flooring", Eco, 5, 45, 25, 9),
    m("Hardwood Flooring", Conv, 15, 60, 30, 6),
    m("Recycled Steel", Eco, 8, 85, 100, 8),
    m("Conventional Steel", Conv, 25, 65, 50, 4),
    m("Reclaimed Wood", Eco, 3, 55, 50, 9),
    m("New Lumber", Conv, 12, 40, 20, 5),
    m("Cork Flooring", Eco, 7, 50, 40, 8),
    m("Vinyl Flooring", Conv, 35, 25, 15, 3),
    m("Hemp Insulation", Eco, 2, 8, 50, 9),
    m("Fiberglass Insulation", Conv, 18, 5, 25, 4),
    m("Solar Panels", Eco, 45, 200, 25, 10),
    m("Coal Energy", Conv, 820, 50, 0, 1),
    m("Low-VOC Paint", Eco, 1, 35, 10, 8),
    m("Standard Paint", Conv, 8, 25, 8, 4),
    m("Recycled Concrete", Eco, 15, 45, 75, 7),
    m("New Concrete", Conv, 35, 30, 50, 5),
    m("Living Roof", Eco, 20, 150, 50, 9),
    m("Asphalt Shingles", Conv, 45, 80, 20, 4),
    m("Triple-Pane Windows", Eco, 25, 120, 40, 8),
    m("Single-Pane Windows", Conv, 55, 40, 15, 3),
];

/// Per-type averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeAverages {
    #[serde(rename = "type")]
    pub material_type: MaterialType,
    pub co2_kg_per_m2: f64,
    pub cost_per_m2: f64,
    pub durability_years: f64,
    pub sustainability_score: f64,
}

/// Headline comparisons between eco-friendly and conventional materials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialInsights {
    /// Percent lower average CO2 for eco-friendly materials.
    pub co2_reduction_percent: f64,
    /// Extra years of average lifetime.
    pub durability_advantage_years: f64,
    /// Percent higher average cost.
    pub cost_premium_percent: f64,
    pub eco_sustainability_avg: f64,
    pub conventional_sustainability_avg: f64,
    pub averages: Vec<TypeAverages>,
}

/// Filtered, sorted table plus insights over the full catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialComparison {
    pub materials: Vec<Material>,
    pub insights: MaterialInsights,
}

pub struct MaterialCatalog;

impl MaterialCatalog {
    pub fn all() -> &'static [Material] {
        &MATERIALS
    }

    /// Rows matching the filter, sorted by the key.
    ///
    /// Ties keep catalog order.
    pub fn table(filter: MaterialFilter, sort_by: SortKey) -> Vec<Material> {
        let mut rows: Vec<Material> = MATERIALS
            .iter()
            .filter(|row| match filter {
                MaterialFilter::All => true,
                MaterialFilter::Only(t) => row.material_type == t,
            })
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            let ordering = Self::compare(a, b, sort_by);
            if sort_by.ascending() {
                ordering
            } else {
                ordering.reverse()
            }
        });
        rows
    }

    pub fn compare_materials(filter: MaterialFilter, sort_by: SortKey) -> MaterialComparison {
        MaterialComparison {
            materials: Self::table(filter, sort_by),
            insights: Self::insights(),
        }
    }

    pub fn averages(material_type: MaterialType) -> TypeAverages {
        let rows: Vec<&Material> = MATERIALS
            .iter()
            .filter(|m| m.material_type == material_type)
            .collect();
        let n = rows.len().max(1) as f64;
        let mean = |f: fn(&Material) -> f64| rows.iter().map(|m| f(m)).sum::<f64>() / n;

        TypeAverages {
            material_type,
            co2_kg_per_m2: mean(|m| f64::from(m.co2_kg_per_m2)),
            cost_per_m2: mean(|m| f64::from(m.cost_per_m2)),
            durability_years: mean(|m| f64::from(m.durability_years)),
            sustainability_score: mean(|m| f64::from(m.sustainability_score)),
        }
    }

    pub fn insights() -> MaterialInsights {
        let eco = Self::averages(MaterialType::EcoFriendly);
        let conv = Self::averages(MaterialType::Conventional);

        MaterialInsights {
            co2_reduction_percent: round1(
                (conv.co2_kg_per_m2 - eco.co2_kg_per_m2) / conv.co2_kg_per_m2 * 100.0,
            ),
            durability_advantage_years: round1(eco.durability_years - conv.durability_years),
            cost_premium_percent: round1(
                (eco.cost_per_m2 - conv.cost_per_m2) / conv.cost_per_m2 * 100.0,
            ),
            eco_sustainability_avg: round1(eco.sustainability_score),
            conventional_sustainability_avg: round1(conv.sustainability_score),
            averages: vec![eco, conv],
        }
    }

    fn compare(a: &Material, b: &Material, key: SortKey) -> Ordering {
        match key {
            SortKey::Material => a.name.cmp(b.name),
            SortKey::Co2 => a.co2_kg_per_m2.cmp(&b.co2_kg_per_m2),
            SortKey::Cost => a.cost_per_m2.cmp(&b.cost_per_m2),
            SortKey::Durability => a.durability_years.cmp(&b.durability_years),
            SortKey::SustainabilityScore => a.sustainability_score.cmp(&b.sustainability_score),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
