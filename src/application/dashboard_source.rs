// Source trait for the dashboard payload
use crate::domain::error::LoadError;
use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Read the raw payload body. Called once per load.
    async fn fetch_body(&self) -> Result<Bytes, LoadError>;
}
