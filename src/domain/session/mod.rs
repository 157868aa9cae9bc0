//! Session module - Per-user dashboard context.

mod aggregate;

pub use aggregate::DashboardSession;
