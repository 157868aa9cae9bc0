//! Lifestyle footprint points.
//!
//! Additive point tables per answer, with two multipliers (work culture,
//! gardens) applied to the running subtotal before the fuel and daily
//! travel terms are added. Unknown or blank choices score zero.

use serde::{Deserialize, Serialize};

const VEHICLE_OWNED: &[(&str, f64)] = &[("Yes", 500.0)];

const FOOD: &[(&str, f64)] = &[
    ("Vegetarian", 100.0),
    ("Lacto-Vegetarian", 200.0),
    ("Pescetarian", 300.0),
    ("Flexitarian", 400.0),
    ("Non-Vegetarian", 500.0),
];

const MEAT: &[(&str, f64)] = &[
    ("Beef", 800.0),
    ("Mutton", 750.0),
    ("Bacon", 700.0),
    ("Pork", 650.0),
    ("Turkey", 500.0),
    ("Duck", 450.0),
    ("Chicken", 400.0),
    ("Seafood", 300.0),
];

const CLOTH: &[(&str, f64)] = &[
    ("Silk", 700.0),
    ("Velvet", 660.0),
    ("Georgette", 640.0),
    ("Nylon", 580.0),
    ("Wool", 550.0),
    ("Rayon", 510.0),
    ("Denim", 470.0),
    ("Cotton", 440.0),
];

const DWELLING: &[(&str, f64)] = &[
    ("High-Rise", 500.0),
    ("Low-Rise", 300.0),
    ("Independent", 650.0),
];

const TRANSPORT: &[(&str, f64)] = &[
    ("Bus", 600.0),
    ("Bike", 400.0),
    ("Car", 500.0),
    ("Train", 750.0),
];

const VEHICLE_FUEL: &[(&str, f64)] = &[
    ("Petrol", 500.0),
    ("Diesel", 450.0),
    ("Gasoline", 600.0),
    ("Hydrogen", 250.0),
    ("Electric", 50.0),
];

const DOMESTIC_FUEL: &[(&str, f64)] = &[("Gas", 300.0), ("Electric", 100.0), ("Wood", 400.0)];

pub const INTERNATIONAL_TRIP_POINTS: f64 = 200.0;
pub const DAILY_TRAVEL_POINTS: f64 = 10.0;

/// A number sent either as JSON number or as a form string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Non-numeric text counts as zero.
    pub fn value(&self) -> f64 {
        let v = match self {
            Numeric::Number(n) => *n,
            Numeric::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if v.is_finite() {
            v
        } else {
            0.0
        }
    }
}

fn numeric(value: &Option<Numeric>) -> f64 {
    value.as_ref().map(Numeric::value).unwrap_or(0.0)
}

/// Answers to the lifestyle questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleAnswers {
    #[serde(alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(alias = "vehicleOwned")]
    pub vehicle_owned: Option<String>,
    #[serde(alias = "foodType")]
    pub food_type: Option<String>,
    #[serde(alias = "meatType")]
    pub meat_type: Option<String>,
    #[serde(alias = "clothType")]
    pub cloth_type: Option<String>,
    #[serde(alias = "IntTravelPerYear")]
    pub international_trips_per_year: Option<Numeric>,
    #[serde(alias = "buildingType")]
    pub dwelling_type: Option<String>,
    /// Litres per day.
    #[serde(alias = "waterUsageDay")]
    pub water_usage_per_day: Option<Numeric>,
    #[serde(alias = "transportType")]
    pub transport_type: Option<String>,
    /// `at home` or `at office`.
    #[serde(alias = "workCulture")]
    pub work_culture: Option<String>,
    #[serde(alias = "Gardens")]
    pub gardens: Option<String>,
    #[serde(alias = "fuelTypeVehicle")]
    pub vehicle_fuel: Option<String>,
    #[serde(alias = "fuelTypeDomestic")]
    pub domestic_fuel: Option<String>,
    #[serde(alias = "DailyTravel")]
    pub daily_travel: Option<Numeric>,
}

/// Computed points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifestyleFootprint {
    pub name: Option<String>,
    pub points: i64,
}

pub struct LifestyleCalculator;

impl LifestyleCalculator {
    pub fn calculate(answers: &LifestyleAnswers) -> LifestyleFootprint {
        let mut total = 0.0;

        total += lookup(VEHICLE_OWNED, &answers.vehicle_owned);
        total += lookup(FOOD, &answers.food_type);
        total += lookup(MEAT, &answers.meat_type);
        total += lookup(CLOTH, &answers.cloth_type);
        total += numeric(&answers.international_trips_per_year) * INTERNATIONAL_TRIP_POINTS;
        total += lookup(DWELLING, &answers.dwelling_type);
        total += numeric(&answers.water_usage_per_day);
        total += lookup(TRANSPORT, &answers.transport_type);

        match answers.work_culture.as_deref().map(str::trim) {
            Some("at home") => total /= 2.0,
            Some("at office") => total *= 2.0,
            _ => {}
        }
        match answers.gardens.as_deref().map(str::trim) {
            Some("Yes") => total /= 2.0,
            Some("No") => total *= 1.5,
            _ => {}
        }

        total += lookup(VEHICLE_FUEL, &answers.vehicle_fuel);
        total += lookup(DOMESTIC_FUEL, &answers.domestic_fuel);
        total += numeric(&answers.daily_travel) * DAILY_TRAVEL_POINTS;

        LifestyleFootprint {
            name: display_name(answers),
            points: total.round() as i64,
        }
    }
}

fn lookup(table: &[(&str, f64)], value: &Option<String>) -> f64 {
    let Some(value) = value.as_deref().map(str::trim) else {
        return 0.0;
    };
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, points)| *points)
        .unwrap_or(0.0)
}

fn display_name(answers: &LifestyleAnswers) -> Option<String> {
    let parts: Vec<&str> = [&answers.first_name, &answers.last_name]
        .into_iter()
        .filter_map(|p| p.as_deref().map(str::trim))
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn empty_answers_score_zero() {
        let result = LifestyleCalculator::calculate(&LifestyleAnswers::default());
        assert_eq!(result.points, 0);
        assert_eq!(result.name, None);
    }

    #[test]
    fn additive_terms_sum() {
        let answers = LifestyleAnswers {
            vehicle_owned: text("Yes"),
            food_type: text("Flexitarian"),
            meat_type: text("Chicken"),
            cloth_type: text("Cotton"),
            international_trips_per_year: Some(Numeric::Number(2.0)),
            dwelling_type: text("Low-Rise"),
            water_usage_per_day: Some(Numeric::Text("150".into())),
            transport_type: text("Train"),
            ..Default::default()
        };
        // 500 + 400 + 400 + 440 + 400 + 300 + 150 + 750
        assert_eq!(LifestyleCalculator::calculate(&answers).points, 3340);
    }

    #[test]
    fn multipliers_apply_only_to_earlier_terms() {
        let answers = LifestyleAnswers {
            vehicle_owned: text("Yes"),
            work_culture: text("at office"),
            gardens: text("Yes"),
            vehicle_fuel: text("Electric"),
            domestic_fuel: text("Gas"),
            daily_travel: Some(Numeric::Number(12.0)),
            ..Default::default()
        };
        // (500 × 2 / 2) + 50 + 300 + 120
        assert_eq!(LifestyleCalculator::calculate(&answers).points, 970);
    }

    #[test]
    fn no_garden_scales_up_and_rounds() {
        let answers = LifestyleAnswers {
            water_usage_per_day: Some(Numeric::Number(101.0)),
            work_culture: text("at home"),
            gardens: text("No"),
            ..Default::default()
        };
        // 101 / 2 × 1.5 = 75.75
        assert_eq!(LifestyleCalculator::calculate(&answers).points, 76);
    }

    #[test]
    fn unknown_choices_and_bad_numbers_score_zero() {
        let answers = LifestyleAnswers {
            food_type: text("Breatharian"),
            daily_travel: Some(Numeric::Text("far".into())),
            ..Default::default()
        };
        assert_eq!(LifestyleCalculator::calculate(&answers).points, 0);
    }

    #[test]
    fn deserializes_form_field_names() {
        let answers: LifestyleAnswers = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","vehicleOwned":"Yes","IntTravelPerYear":"1","DailyTravel":3}"#,
        )
        .unwrap();
        let result = LifestyleCalculator::calculate(&answers);
        assert_eq!(result.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(result.points, 500 + 200 + 30);
    }
}
