use crate::domain::model::{House, PageData};
use crate::utils::error::{HarvestError, Result};
use reqwest::Client;

/// Outcome of fetching one listing page.
#[derive(Debug)]
pub struct PageOutcome {
    pub houses: Vec<House>,
    pub is_last_page: bool,
}

/// Client for the paginated houses listing API.
pub struct HousesApi {
    client: Client,
    base_url: String,
    page_size: usize,
}

impl HousesApi {
    pub fn new(client: Client, base_url: String, page_size: usize) -> Self {
        Self {
            client,
            base_url,
            page_size,
        }
    }

    /// Query parameter order is fixed: page first, then per_page.
    pub fn build_url(&self, page: u32) -> String {
        format!(
            "{}?page={}&per_page={}",
            self.base_url, page, self.page_size
        )
    }

    pub async fn fetch_page(&self, page: u32) -> Result<PageOutcome> {
        let url = self.build_url(page);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            tracing::warn!(
                "API returned unexpected response status = {} in page = {}",
                status,
                page
            );
            return Err(HarvestError::HttpStatus { status, page });
        }

        let body = response.bytes().await?;
        let data: PageData = serde_json::from_slice(&body)
            .map_err(|source| HarvestError::MalformedPayload { page, source })?;

        if !data.ok {
            tracing::warn!(
                "API returned not ok response in page = {}: {}",
                page,
                data.message
            );
            return Err(HarvestError::ApiRejected {
                page,
                message: data.message,
            });
        }

        let is_last_page = data.houses.len() < self.page_size || data.houses.is_empty();
        Ok(PageOutcome {
            houses: data.houses,
            is_last_page,
        })
    }
}
