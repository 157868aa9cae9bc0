//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `questionnaire` - Question catalog, answers, scoring and tips
//! - `report` - Infographic data, pledges and certificates
//! - `session` - Dashboard session aggregate
//! - `materials` - Building material comparison
//! - `footprint` - Annual and lifestyle carbon footprint estimators
//! - `image` - Upload validation and image decoding
//! - `room` - Room analysis results from the vision model
//! - `waste` - Waste classifier labels

pub mod footprint;
pub mod foundation;
pub mod image;
pub mod materials;
pub mod questionnaire;
pub mod report;
pub mod room;
pub mod session;
pub mod waste;
