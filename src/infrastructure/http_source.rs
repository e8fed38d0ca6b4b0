// HTTP implementation of the dashboard source
use crate::application::dashboard_source::DashboardSource;
use crate::domain::error::LoadError;
use crate::infrastructure::config::SourceSettings;
use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct HttpDashboardSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDashboardSource {
    pub fn new(settings: &SourceSettings) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            url: settings.url(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DashboardSource for HttpDashboardSource {
    async fn fetch_body(&self) -> Result<Bytes, LoadError> {
        tracing::debug!("Fetching dashboard data from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LoadError::Fetch(format!("request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Fetch(format!(
                "{} returned status {}",
                self.url, status
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| LoadError::Fetch(format!("reading body from {} failed: {}", self.url, e)))
    }
}
