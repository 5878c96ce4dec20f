use crate::core::api::HousesApi;
use crate::core::download::{Downloader, InlineSink};
use crate::core::pagination::run_pagination;
use crate::core::worker::{spawn_workers, ChannelSink};
use crate::domain::model::House;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Top-level orchestrator: owns the listing API client, the downloader and the
/// configuration, and wires pagination to the download path.
pub struct HarvestEngine<S: Storage, C: ConfigProvider> {
    api: HousesApi,
    downloader: Arc<Downloader<S>>,
    config: C,
}

impl<S, C> HarvestEngine<S, C>
where
    S: Storage + 'static,
    C: ConfigProvider,
{
    pub fn new(api: HousesApi, downloader: Downloader<S>, config: C) -> Self {
        Self {
            api,
            downloader: Arc::new(downloader),
            config,
        }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::info!("process starts");
        if self.config.concurrent() {
            self.run_concurrent().await
        } else {
            self.run_sequential().await
        }
    }

    /// Concurrent mode: a fixed worker pool drains the bounded queue while
    /// pagination produces into it. The queue is closed exactly once, when the
    /// sink is dropped at the end of pagination; after that the workers are
    /// always joined, so even a fatal pagination error drains in-flight
    /// downloads before the error propagates.
    async fn run_concurrent(&self) -> Result<()> {
        let (tx, rx) = mpsc::channel::<House>(self.config.queue_capacity());
        let workers = spawn_workers(self.config.workers(), rx, Arc::clone(&self.downloader));

        let outcome = {
            let sink = ChannelSink::new(tx);
            run_pagination(&self.api, &sink, &self.config).await
        };

        if outcome.is_ok() {
            tracing::info!("process step 1 completed: fetch completed");
        }
        for worker in workers {
            if let Err(e) = worker.await {
                tracing::error!("worker task failed to join: {}", e);
            }
        }
        if outcome.is_ok() {
            tracing::info!("process step 2 completed: images downloaded");
        }
        outcome
    }

    async fn run_sequential(&self) -> Result<()> {
        let sink = InlineSink::new(Arc::clone(&self.downloader));
        run_pagination(&self.api, &sink, &self.config).await?;
        tracing::info!("process completed: pages fetched and images downloaded");
        Ok(())
    }
}
