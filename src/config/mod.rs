pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "house-harvest")]
#[command(about = "Fetches the paginated house listing and downloads each photo")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "http://app-homevision-staging.herokuapp.com/api_project/houses"
    )]
    pub base_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "10")]
    pub page_size: usize,

    #[arg(long, default_value = "10")]
    pub max_pages: u32,

    #[arg(long, default_value = "20")]
    pub retries: u32,

    #[arg(long, default_value = "100")]
    pub retry_delay_ms: u64,

    #[arg(long, default_value = "5")]
    pub workers: usize,

    #[arg(long, default_value = "50")]
    pub queue_capacity: usize,

    #[arg(long, help = "Download inline with page fetching, no worker pool")]
    pub sequential: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn max_pages(&self) -> u32 {
        self.max_pages
    }

    fn retries(&self) -> u32 {
        self.retries
    }

    fn retry_delay_ms(&self) -> u64 {
        self.retry_delay_ms
    }

    fn workers(&self) -> usize {
        self.workers
    }

    fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    fn concurrent(&self) -> bool {
        !self.sequential
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_positive_number("page_size", self.page_size, 1)?;
        validate_positive_number("max_pages", self.max_pages as usize, 1)?;
        validate_positive_number("retries", self.retries as usize, 1)?;
        validate_positive_number("workers", self.workers, 1)?;
        validate_positive_number("queue_capacity", self.queue_capacity, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            base_url: "http://api.test/houses".to_string(),
            output_path: "./output".to_string(),
            page_size: 10,
            max_pages: 10,
            retries: 20,
            retry_delay_ms: 100,
            workers: 5,
            queue_capacity: 50,
            sequential: false,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = base_config();
        config.workers = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let mut config = base_config();
        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sequential_flag_disables_concurrency() {
        let mut config = base_config();
        assert!(config.concurrent());
        config.sequential = true;
        assert!(!config.concurrent());
    }
}
