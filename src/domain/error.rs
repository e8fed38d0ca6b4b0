// Errors raised while loading the dashboard payload
use thiserror::Error;

/// Every way a dashboard load can fail before any chart is drawn.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The read itself failed (connection, timeout or non-success status).
    #[error("failed to fetch dashboard data: {0}")]
    Fetch(String),

    /// The body was not valid JSON or did not have the payload shape.
    #[error("failed to decode dashboard data: {0}")]
    Decode(#[from] serde_json::Error),

    /// A series group has a value sequence that does not line up with its labels.
    #[error("series group {group}: {series} has {values} values for {labels} labels")]
    Inconsistent {
        group: &'static str,
        series: &'static str,
        labels: usize,
        values: usize,
    },
}
