use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub source: SourceSettings,
    pub renderer: RendererSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub base_url: String,
    pub path: String,
    pub timeout_secs: Option<u64>,
}

impl SourceSettings {
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RendererSettings {
    pub output_dir: PathBuf,
}

/// Load `config/dashboard.toml` (optional) with `DASHBOARD__*` env overrides
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let builder = config::Config::builder()
        .add_source(File::with_name("config/dashboard").required(false))
        .add_source(Environment::with_prefix("DASHBOARD").separator("__"));

    build_dashboard_config(builder)
}

fn build_dashboard_config(
    builder: ConfigBuilder<DefaultState>,
) -> anyhow::Result<DashboardConfig> {
    let settings = builder
        .set_default("source.base_url", "http://127.0.0.1:8000")?
        .set_default("source.path", "/api/dashboard-data/")?
        .set_default("renderer.output_dir", "charts")?
        .build()?;

    Ok(settings.try_deserialize()?)
}
