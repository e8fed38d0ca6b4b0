// Infrastructure layer - External dependencies and adapters
pub mod chartjs_renderer;
pub mod config;
pub mod http_source;
pub mod tracing_diagnostics;
