//! Improvement tips keyed by building type and question.

use serde::Serialize;

use super::answers::{AnswerSet, MissedItem};
use super::building::BuildingType;
use super::catalog::Category;

/// Tips shown regardless of answers.
pub const GENERAL_TIPS: [&str; 6] = [
    "🏆 Set specific, measurable sustainability goals",
    "📊 Regularly monitor and track your environmental impact",
    "👥 Engage all occupants in sustainability efforts",
    "🎓 Stay informed about new green building technologies",
    "🤝 Partner with local environmental organizations",
    "💚 Make sustainability a core value in your space",
];

pub const MAINTENANCE_TIPS: [&str; 4] = [
    "Regular HVAC system maintenance",
    "Annual energy audits",
    "Continuous monitoring of water usage",
    "Updating older efficient systems",
];

pub const INNOVATION_TIPS: [&str; 4] = [
    "Smart home/building technologies",
    "Advanced renewable energy systems",
    "Green roof and wall installations",
    "Electric vehicle charging stations",
];

// Indexed by catalog position.
const HOME_TIPS: [&str; 20] = [
    "🔌 Replace incandescent and CFL bulbs with LED lighting throughout your home - they use 75% less energy and last 25 times longer",
    "🏠 Add insulation to walls, attic, and basement to reduce heating/cooling costs by up to 30%",
    "🌡️ Install a programmable thermostat to automatically adjust temperature when away - save up to $180/year",
    "☀️ Consider solar panel installation - federal tax credits can cover 30% of costs",
    "🪟 Upgrade to double or triple-pane windows to reduce energy loss by up to 25%",
    "🚿 Install low-flow showerheads (2.5 GPM or less) and faucet aerators to reduce water use by 30%",
    "🚽 Upgrade to dual-flush toilets that use 20% less water than standard models",
    "🌧️ Set up rain barrels or cisterns to collect rainwater for garden irrigation",
    "🏡 Replace lawn areas with native, drought-resistant plants to reduce water usage by 50%",
    "💧 Install smart water leak detectors and check for leaks monthly - a small drip can waste 3,000 gallons/year",
    "♻️ Set up clearly labeled bins for different recyclables and establish pickup schedules",
    "🌱 Start a backyard compost bin for food scraps and yard waste - reduces garbage by 30%",
    "📦 Buy in bulk, choose products with minimal packaging, and bring reusable bags when shopping",
    "🔄 Create a donation station and research local charities that accept household items",
    "🗑️ Switch to reusable containers, water bottles, and shopping bags",
    "🌲 Choose materials with high recycled content - recycled steel, reclaimed wood, recycled glass countertops",
    "🏠 Source materials within 500 miles to reduce transportation emissions and support local economy",
    "🎨 Use zero or low-VOC paints, stains, and finishes to improve indoor air quality",
    "⚡ Install bamboo, cork, or reclaimed wood flooring - renewable and durable options",
    "🪑 Choose furniture made from certified sustainable wood, recycled materials, or rapidly renewable resources",
];

const OFFICE_TIPS: [&str; 20] = [
    "💡 Convert to LED lighting with motion sensors to reduce office energy consumption by 40%",
    "🏢 Improve building envelope insulation to reduce HVAC costs significantly",
    "🌡️ Install smart building management systems for zone-based temperature control",
    "⚡ Consider rooftop solar or purchase renewable energy credits for your office",
    "🪟 Upgrade to energy-efficient windows and add automated blinds for optimal light control",
    "🚰 Install sensor-activated faucets and low-flow fixtures in restrooms",
    "♻️ Upgrade to water-efficient toilets and consider waterless urinals",
    "🌧️ Install rainwater collection systems for landscape irrigation",
    "🌿 Design xeriscaped areas with native, drought-resistant plants around the office",
    "💧 Install smart water monitoring systems to detect leaks immediately",
    "♻️ Implement comprehensive recycling stations with clear labeling throughout the office",
    "🍃 Set up composting programs for cafeteria and break room organic waste",
    "📄 Implement paperless policies and choose suppliers with minimal packaging",
    "🔄 Create furniture donation programs and electronics refurbishment initiatives",
    "☕ Provide reusable cups, utensils, and encourage employees to bring their own",
    "🏢 Specify high recycled content materials for office buildouts and renovations",
    "🌱 Partner with local suppliers for office materials and furniture",
    "🎨 Use only low-emission materials to maintain healthy indoor air quality",
    "⚡ Install sustainable flooring options like bamboo or carpet with recycled content",
    "🪑 Choose office furniture with certified sustainable materials and take-back programs",
];

const SCHOOL_TIPS: [&str; 20] = [
    "💡 Upgrade to LED lighting and use this as a teaching opportunity about energy efficiency",
    "🏫 Improve insulation and incorporate energy monitoring into STEM curriculum",
    "🌡️ Install smart thermostats in each classroom for zone-based control and energy education",
    "⚡ Install solar panels as both energy source and educational tool for science classes",
    "🪟 Upgrade windows and teach students about heat transfer and energy efficiency",
    "🚰 Install water-efficient fixtures and bottle-filling stations to reduce plastic waste",
    "♻️ Upgrade to efficient toilets and educate students about water conservation",
    "🌧️ Create rain gardens and collection systems as outdoor classrooms",
    "💧 Plant native species and create educational gardens for biology classes",
    "🔧 Implement maintenance programs and teach students about water systems",
    "📚 Create student-led recycling programs with monitoring and education components",
    "🍎 Start cafeteria composting programs managed by students and science classes",
    "♻️ Educate students about waste reduction and implement waste-free lunch days",
    "🔄 Create student programs for electronics recycling and furniture refurbishment",
    "🎒 Encourage reusable lunch containers and water bottles through incentive programs",
    "📚 Use recycled content materials and incorporate sustainability into construction trades classes",
    "🌱 Source local materials and teach students about supply chains and environmental impact",
    "🎨 Use healthy materials and educate about indoor air quality",
    "🏫 Install sustainable flooring and use it to teach about renewable materials",
    "♻️ Choose sustainable furniture and incorporate green building principles into curriculum",
];

/// A missed question paired with its recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub question_id: &'static str,
    pub question: &'static str,
    pub tip: &'static str,
}

/// Recommendations for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecommendations {
    pub category: Category,
    pub name: &'static str,
    pub icon: &'static str,
    pub recommendations: Vec<Recommendation>,
}

/// Looks up the tip for a question id.
pub fn tip_for(building: BuildingType, question_id: &str) -> Option<&'static str> {
    let index = super::catalog::QUESTIONS
        .iter()
        .position(|q| q.id == question_id)?;
    let table = match building {
        BuildingType::Home => &HOME_TIPS,
        BuildingType::Office => &OFFICE_TIPS,
        BuildingType::School => &SCHOOL_TIPS,
    };
    table.get(index).copied()
}

/// Groups missed items by category and attaches building-specific tips.
///
/// Categories with nothing missed are omitted.
pub fn recommendations(answers: &AnswerSet, building: BuildingType) -> Vec<CategoryRecommendations> {
    let missed = answers.missed_items();
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let recommendations: Vec<_> = missed
                .iter()
                .filter(|item| item.category == category)
                .filter_map(|item: &MissedItem| {
                    tip_for(building, item.question_id).map(|tip| Recommendation {
                        question_id: item.question_id,
                        question: item.question,
                        tip,
                    })
                })
                .collect();

            if recommendations.is_empty() {
                None
            } else {
                Some(CategoryRecommendations {
                    category,
                    name: category.name(),
                    icon: category.icon(),
                    recommendations,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::catalog::Catalog;

    #[test]
    fn every_question_has_a_tip_for_every_building() {
        for building in BuildingType::ALL {
            for question in Catalog::questions() {
                assert!(
                    tip_for(building, question.id).is_some(),
                    "missing tip for {} / {}",
                    building,
                    question.id
                );
            }
        }
    }

    #[test]
    fn tips_differ_by_building() {
        let home = tip_for(BuildingType::Home, "energy-1").unwrap();
        let school = tip_for(BuildingType::School, "energy-1").unwrap();
        assert_ne!(home, school);
        assert!(school.contains("teaching opportunity"));
    }

    #[test]
    fn unknown_question_has_no_tip() {
        assert!(tip_for(BuildingType::Home, "garage-1").is_none());
    }

    #[test]
    fn recommendations_group_by_category() {
        let mut answers = AnswerSet::uniform(true);
        answers.set("water-2", false).unwrap();
        answers.set("water-4", false).unwrap();
        answers.set("materials-1", false).unwrap();

        let groups = recommendations(&answers, BuildingType::Office);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, Category::WaterConservation);
        assert_eq!(groups[0].recommendations.len(), 2);
        assert_eq!(groups[1].category, Category::MaterialSustainability);
        assert!(groups[1].recommendations[0].tip.contains("office buildouts"));
    }

    #[test]
    fn perfect_answers_need_no_recommendations() {
        assert!(recommendations(&AnswerSet::uniform(true), BuildingType::Home).is_empty());
    }
}
