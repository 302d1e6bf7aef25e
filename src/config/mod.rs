pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_unit_range, validate_url, Validate};
use clap::Args;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct CliConfig {
    /// Base URL of the remote voyage service.
    #[arg(long, default_value = "http://localhost:3000")]
    pub base_url: String,

    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,

    /// Share of delete attempts that fail by injected fault.
    #[arg(long, default_value = "0.5")]
    pub delete_failure_rate: f64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    fn delete_failure_rate(&self) -> f64 {
        self.delete_failure_rate
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("request_timeout_secs", self.request_timeout_secs, 1)?;
        validate_unit_range("delete_failure_rate", self.delete_failure_rate)?;
        Ok(())
    }
}
