//! Annual household emissions from simplified emission factors.
//!
//! ```text
//! electricity = bill / 0.17 × 0.82 × 12        (bill in $/month)
//! transport   = miles_per_week × 52 × 0.404
//! flights     = flights_per_year × 3 × 250
//! diet        = fixed yearly amount per diet
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Message shown when a numeric field cannot be read.
pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter numbers only.";

/// Average electricity price used to turn a bill into kWh.
pub const PRICE_PER_KWH: f64 = 0.17;
/// kg CO2e per kWh on an average grid.
pub const ELECTRICITY_FACTOR: f64 = 0.82;
/// kg CO2e per mile for an average gasoline car.
pub const CAR_MILE_FACTOR: f64 = 0.404;
/// kg CO2e per hour of flight.
pub const FLIGHT_HOUR_FACTOR: f64 = 250.0;
/// Assumed hours per flight.
pub const HOURS_PER_FLIGHT: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    MeatLover,
    #[default]
    Average,
    Vegetarian,
    Vegan,
}

impl Diet {
    /// Yearly kg CO2e.
    pub fn annual_kg(&self) -> f64 {
        match self {
            Diet::MeatLover => 3300.0,
            Diet::Average => 2500.0,
            Diet::Vegetarian => 1700.0,
            Diet::Vegan => 1500.0,
        }
    }

    /// Unrecognized values fall back to `Average`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "meat_lover" => Diet::MeatLover,
            "vegetarian" => Diet::Vegetarian,
            "vegan" => Diet::Vegan,
            _ => Diet::Average,
        }
    }
}

/// Parsed calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnnualInputs {
    pub electricity_bill: f64,
    pub car_miles_per_week: f64,
    pub flights_per_year: f64,
    pub diet: Diet,
}

impl AnnualInputs {
    /// Parses raw form values. Missing numbers count as zero; a field that
    /// is present must hold a number, so a blank one is rejected.
    ///
    /// Negative values are accepted. A non-positive bill contributes no
    /// electricity emissions.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` naming the offending field when a present value is
    /// blank or not a finite number.
    pub fn parse(
        electricity: Option<&str>,
        car_distance: Option<&str>,
        flights: Option<&str>,
        diet: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            electricity_bill: parse_number("electricity", electricity)?,
            car_miles_per_week: parse_number("car_distance", car_distance)?,
            flights_per_year: parse_number("flights", flights)?,
            diet: diet.map(Diet::parse_lenient).unwrap_or_default(),
        })
    }
}

fn parse_number(field: &str, raw: Option<&str>) -> Result<f64, ValidationError> {
    let Some(raw) = raw else {
        return Ok(0.0);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::invalid_format(field, INVALID_NUMBER_MESSAGE)),
    }
}

/// Yearly kg CO2e per source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualFootprint {
    pub electricity: f64,
    pub transport: f64,
    pub flights: f64,
    pub diet: f64,
    pub total: f64,
}

impl AnnualFootprint {
    /// Total in metric tons, two decimals.
    pub fn total_tons(&self) -> f64 {
        (self.total / 10.0).round() / 100.0
    }
}

pub struct AnnualCalculator;

impl AnnualCalculator {
    pub fn calculate(inputs: &AnnualInputs) -> AnnualFootprint {
        let monthly_kwh = if inputs.electricity_bill > 0.0 {
            inputs.electricity_bill / PRICE_PER_KWH
        } else {
            0.0
        };
        let electricity = monthly_kwh * ELECTRICITY_FACTOR * 12.0;
        let transport = inputs.car_miles_per_week * 52.0 * CAR_MILE_FACTOR;
        let flights = inputs.flights_per_year * HOURS_PER_FLIGHT * FLIGHT_HOUR_FACTOR;
        let diet = inputs.diet.annual_kg();

        AnnualFootprint {
            electricity,
            transport,
            flights,
            diet,
            total: electricity + transport + flights + diet,
        }
    }
}
