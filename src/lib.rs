pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};

pub use core::{api::HousesApi, download::Downloader, engine::HarvestEngine};
pub use utils::error::{HarvestError, Result};
