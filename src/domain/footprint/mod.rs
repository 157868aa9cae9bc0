//! Footprint module - Carbon footprint estimators.
//!
//! - `AnnualCalculator` - kg CO2e per year from bills, mileage, flights and diet
//! - `LifestyleCalculator` - point score from the lifestyle questionnaire

mod annual;
mod lifestyle;

pub use annual::{
    AnnualCalculator, AnnualFootprint, AnnualInputs, Diet, CAR_MILE_FACTOR,
    ELECTRICITY_FACTOR, FLIGHT_HOUR_FACTOR, HOURS_PER_FLIGHT, INVALID_NUMBER_MESSAGE,
    PRICE_PER_KWH,
};
pub use lifestyle::{
    LifestyleAnswers, LifestyleCalculator, LifestyleFootprint, Numeric,
    DAILY_TRAVEL_POINTS, INTERNATIONAL_TRIP_POINTS,
};
