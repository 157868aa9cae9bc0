//! Report module - Infographic data, pledges and certificates.

mod certificate;
mod infographic;
mod pledge;

pub use certificate::{
    escape_xml, Certificate, CertificateRenderer, CERTIFICATE_HEIGHT, CERTIFICATE_WIDTH,
};
pub use infographic::{
    CategorySeries, Gauge, GaugeBand, InfographicBuilder, InfographicReport, RadarPoint,
    GAUGE_REFERENCE, GAUGE_THRESHOLD,
};
pub use pledge::{
    Commitment, CommunityImpact, Pledge, MAX_CUSTOM_PLEDGE_LEN, MAX_NAME_LEN, SHARE_TEXT,
};
