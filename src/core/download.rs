use crate::domain::model::House;
use crate::domain::ports::{HouseSink, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;
use std::sync::Arc;
use url::Url;

const FILE_NAME_COMPONENT_SEPARATOR: &str = "-";

/// Fetches a house photo and hands the bytes to storage.
pub struct Downloader<S: Storage> {
    client: Client,
    storage: S,
}

impl<S: Storage> Downloader<S> {
    pub fn new(client: Client, storage: S) -> Self {
        Self { client, storage }
    }

    /// `{id}-{address}{ext}`, where the extension (dot included) comes from the
    /// photo URL path. Address text is kept verbatim, spaces and all.
    pub fn file_name(house: &House) -> String {
        format!(
            "{}{}{}{}",
            house.id,
            FILE_NAME_COMPONENT_SEPARATOR,
            house.address,
            photo_extension(&house.photo_url)
        )
    }

    pub async fn download(&self, house: &House) -> Result<()> {
        let response = self
            .client
            .get(&house.photo_url)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;
        self.storage
            .write_file(&Self::file_name(house), &bytes)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
impl<S: Storage> Downloader<S> {
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }
}

fn photo_extension(photo_url: &str) -> String {
    Url::parse(photo_url)
        .ok()
        .and_then(|url| {
            Path::new(url.path())
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
        })
        .unwrap_or_default()
}

/// Sequential-mode sink: downloads on dispatch instead of queueing. A failed
/// record is logged and skipped, it never stops the run.
pub struct InlineSink<S: Storage> {
    downloader: Arc<Downloader<S>>,
}

impl<S: Storage> InlineSink<S> {
    pub fn new(downloader: Arc<Downloader<S>>) -> Self {
        Self { downloader }
    }
}

#[async_trait]
impl<S: Storage> HouseSink for InlineSink<S> {
    async fn dispatch(&self, house: House) -> Result<()> {
        tracing::info!("Downloading ID={}", house.id);
        if let Err(e) = self.downloader.download(&house).await {
            tracing::warn!("Download failed for ID={}: {}", house.id, e);
        }
        Ok(())
    }
}
