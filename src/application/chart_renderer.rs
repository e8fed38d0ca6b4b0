// Rendering capability the loader draws through
use crate::domain::chart::{ChartKind, ChartOptions, ChartSeries};

pub trait ChartRenderer: Send + Sync {
    /// Draw `series` as a `kind` chart onto the surface named `surface`.
    fn render(
        &self,
        surface: &str,
        kind: ChartKind,
        series: &ChartSeries,
        options: &ChartOptions,
    ) -> anyhow::Result<()>;
}
