use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_unit_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DELETE_FAILURE_RATE: f64 = 0.5;

/// TOML file configuration, an alternative to CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub service: ServiceConfig,
    pub fault: Option<FaultConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultConfig {
    pub delete_failure_rate: Option<f64>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ConfigProvider for FileConfig {
    fn api_base_url(&self) -> &str {
        &self.service.base_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.service
            .request_timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    fn delete_failure_rate(&self) -> f64 {
        self.fault
            .as_ref()
            .and_then(|fault| fault.delete_failure_rate)
            .unwrap_or(DEFAULT_DELETE_FAILURE_RATE)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service.base_url", &self.service.base_url)?;
        validate_positive_number("service.request_timeout_secs", self.request_timeout_secs(), 1)?;
        validate_unit_range("fault.delete_failure_rate", self.delete_failure_rate())?;
        Ok(())
    }
}
