// Application layer - Use cases and the seams they depend on
pub mod chart_renderer;
pub mod dashboard_loader;
pub mod dashboard_source;
pub mod diagnostics;
