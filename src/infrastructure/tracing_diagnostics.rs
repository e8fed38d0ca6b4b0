// Diagnostics channel backed by tracing
use crate::application::diagnostics::Diagnostics;
use crate::domain::error::LoadError;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report_failure(&self, error: &LoadError) {
        tracing::error!("Error fetching dashboard data: {}", error);
    }
}
