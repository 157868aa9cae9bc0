//! Waste classifier configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Waste classifier configuration
///
/// Both fields are optional: without an endpoint the predictor reports
/// itself unavailable, and without a labels file the built-in table is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Model server predict URL
    pub endpoint: Option<String>,

    /// Path to a `labels.txt` file (`<id> <label>` per line)
    pub labels_path: Option<PathBuf>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ClassifierConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured endpoint, ignoring blank values
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
    }

    /// Validate classifier configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(endpoint) = self.endpoint() {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidUrl {
                    section: "classifier",
                    url: endpoint.to_string(),
                });
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            labels_path: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_config_defaults() {
        let config = ClassifierConfig::default();
        assert!(config.endpoint().is_none());
        assert!(config.labels_path.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_endpoint_is_ignored() {
        let config = ClassifierConfig {
            endpoint: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.endpoint().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_must_be_http() {
        let config = ClassifierConfig {
            endpoint: Some("localhost:8501/v1/models/waste:predict".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ClassifierConfig {
            endpoint: Some("http://localhost:8501/v1/models/waste:predict".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
