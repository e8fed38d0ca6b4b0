// Main entry point - Dependency injection and a single dashboard load
mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_loader::DashboardDataLoader;
use crate::infrastructure::chartjs_renderer::ChartJsFileRenderer;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_source::HttpDashboardSource;
use crate::infrastructure::tracing_diagnostics::TracingDiagnostics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create source and renderer (infrastructure layer)
    let source = Arc::new(HttpDashboardSource::new(&config.source)?);
    let renderer = Arc::new(ChartJsFileRenderer::new(config.renderer.output_dir));

    tracing::info!("Loading dashboard data from {}", source.url());

    // Run the loader once (application layer)
    let loader = DashboardDataLoader::new(source, renderer, Arc::new(TracingDiagnostics));
    loader.load_and_render().await;

    Ok(())
}
