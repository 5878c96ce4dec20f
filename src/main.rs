use clap::Parser;
use house_harvest::utils::{logger, validation::Validate};
use house_harvest::{CliConfig, Downloader, HarvestEngine, HousesApi, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting house-harvest CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = reqwest::Client::new();
    let storage = LocalStorage::new(config.output_path.clone());
    let api = HousesApi::new(client.clone(), config.base_url.clone(), config.page_size);
    let downloader = Downloader::new(client, storage);

    let engine = HarvestEngine::new(api, downloader, config);

    match engine.run().await {
        Ok(()) => {
            tracing::info!("✅ Harvest completed successfully!");
            println!("✅ Harvest completed successfully!");
        }
        Err(e) => {
            tracing::error!("❌ Harvest failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
