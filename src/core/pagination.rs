use crate::core::api::HousesApi;
use crate::core::retry;
use crate::domain::ports::{ConfigProvider, HouseSink};
use crate::utils::error::Result;
use std::time::Duration;

/// Walks the listing page by page, starting at 1, forwarding every discovered
/// house to `sink` in parse order. Each page fetch goes through the retry
/// policy; only retry exhaustion (or a closed sink) aborts the run. Stops at
/// the last page, or silently once the next page would exceed max_pages.
///
/// Pages are fetched strictly sequentially: page n+1 is never requested before
/// page n has been fetched and its records dispatched.
pub async fn run_pagination<C: ConfigProvider>(
    api: &HousesApi,
    sink: &dyn HouseSink,
    config: &C,
) -> Result<()> {
    let base_delay = Duration::from_millis(config.retry_delay_ms());
    let mut page: u32 = 1;

    loop {
        tracing::info!("Processing page {}", page);
        let outcome = retry::retry(|| api.fetch_page(page), config.retries(), base_delay).await?;

        for house in outcome.houses {
            sink.dispatch(house).await?;
        }

        if outcome.is_last_page {
            break;
        }
        page += 1;
        if page > config.max_pages() {
            break;
        }
    }

    Ok(())
}
