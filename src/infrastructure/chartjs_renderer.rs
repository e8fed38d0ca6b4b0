// Renderer that writes Chart.js configuration documents, one file per surface
use crate::application::chart_renderer::ChartRenderer;
use crate::domain::chart::{ChartKind, ChartOptions, ChartSeries};
use anyhow::Context;
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ChartJsFileRenderer {
    output_dir: PathBuf,
}

impl ChartJsFileRenderer {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

impl ChartRenderer for ChartJsFileRenderer {
    fn render(
        &self,
        surface: &str,
        kind: ChartKind,
        series: &ChartSeries,
        options: &ChartOptions,
    ) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {}", self.output_dir.display())
        })?;

        let path = self.output_dir.join(format!("{}.json", surface));
        let document = serde_json::to_vec_pretty(&chart_config(kind, series, options))?;
        std::fs::write(&path, document)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("Wrote {} chart to {}", kind.as_str(), path.display());
        Ok(())
    }
}

/// Build the object Chart.js takes as `new Chart(ctx, config)`
pub fn chart_config(kind: ChartKind, series: &ChartSeries, options: &ChartOptions) -> Value {
    let datasets: Vec<Value> = series
        .datasets
        .iter()
        .map(|d| {
            json!({
                "label": d.label,
                "data": d.data,
                "backgroundColor": d.style.background_color,
                "borderColor": d.style.border_color,
                "borderWidth": d.style.border_width,
            })
        })
        .collect();

    json!({
        "type": kind,
        "data": {
            "labels": series.labels,
            "datasets": datasets,
        },
        "options": {
            "responsive": options.responsive,
            "scales": {
                "y": { "beginAtZero": options.y_begin_at_zero }
            }
        }
    })
}
