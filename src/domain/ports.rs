use crate::domain::model::House;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn page_size(&self) -> usize;
    fn max_pages(&self) -> u32;
    fn retries(&self) -> u32;
    fn retry_delay_ms(&self) -> u64;
    fn workers(&self) -> usize;
    fn queue_capacity(&self) -> usize;
    fn concurrent(&self) -> bool;
}

/// Where the pagination producer hands off discovered houses: either the
/// bounded work queue (concurrent mode) or an inline downloader.
#[async_trait]
pub trait HouseSink: Send + Sync {
    async fn dispatch(&self, house: House) -> Result<()>;
}
