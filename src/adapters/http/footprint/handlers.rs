//! HTTP handlers for the footprint calculators.
//!
//! Both calculators are pure, so no application state is involved.

use axum::extract::{Form, Json};

use crate::adapters::http::error::ApiError;
use crate::domain::footprint::{
    AnnualCalculator, AnnualInputs, LifestyleAnswers, LifestyleCalculator, LifestyleFootprint,
    INVALID_NUMBER_MESSAGE,
};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::dto::{AnnualFootprintForm, AnnualFootprintResponse};

/// POST /api/footprint/annual
pub async fn annual_footprint(
    Form(form): Form<AnnualFootprintForm>,
) -> Result<Json<AnnualFootprintResponse>, ApiError> {
    let inputs = AnnualInputs::parse(
        form.electricity.as_deref(),
        form.car_distance.as_deref(),
        form.flights.as_deref(),
        form.diet.as_deref(),
    )
    .map_err(|err| {
        let field = match &err {
            ValidationError::InvalidFormat { field, .. } => field.clone(),
            _ => String::new(),
        };
        ApiError::from(
            DomainError::new(ErrorCode::InvalidFormat, INVALID_NUMBER_MESSAGE)
                .with_detail("field", field),
        )
    })?;

    let footprint = AnnualCalculator::calculate(&inputs);
    tracing::debug!(total = footprint.total, "Annual footprint calculated");
    Ok(Json(footprint.into()))
}

/// POST /api/footprint/lifestyle
pub async fn lifestyle_footprint(Json(answers): Json<LifestyleAnswers>) -> Json<LifestyleFootprint> {
    Json(LifestyleCalculator::calculate(&answers))
}
