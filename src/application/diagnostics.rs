// Channel for load failures
use crate::domain::error::LoadError;

pub trait Diagnostics: Send + Sync {
    fn report_failure(&self, error: &LoadError);
}
