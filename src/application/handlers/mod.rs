//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over ports.

pub mod dashboard;
pub mod room;
pub mod waste;
