pub mod api;
pub mod download;
pub mod engine;
pub mod pagination;
pub mod retry;
pub mod worker;

pub use crate::domain::model::{House, PageData};
pub use crate::domain::ports::{ConfigProvider, HouseSink, Storage};
pub use crate::utils::error::Result;
