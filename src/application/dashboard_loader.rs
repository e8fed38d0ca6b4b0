// Dashboard loader - Use case for fetching the payload and drawing the charts
use crate::application::chart_renderer::ChartRenderer;
use crate::application::dashboard_source::DashboardSource;
use crate::application::diagnostics::Diagnostics;
use crate::domain::chart::{ChartKind, ChartOptions, ChartPlan, ChartSeries, Dataset, DatasetStyle};
use crate::domain::error::LoadError;
use crate::domain::payload::{DashboardPayload, LedgerSeries};
use std::sync::Arc;

pub const SADDQAH_SURFACE: &str = "saddqahChart";
pub const PROJECT_LEDGERS_SURFACE: &str = "projectLedgersChart";
pub const PARTY_PROJECT_LEDGERS_SURFACE: &str = "partyProjectLedgersChart";

const SADDQAH_STYLE: DatasetStyle =
    DatasetStyle::new("rgba(75, 192, 192, 0.2)", "rgba(75, 192, 192, 1)");
const PROJECT_PAID_STYLE: DatasetStyle =
    DatasetStyle::new("rgba(153, 102, 255, 0.2)", "rgba(153, 102, 255, 1)");
const PROJECT_RECEIVED_STYLE: DatasetStyle =
    DatasetStyle::new("rgba(255, 159, 64, 0.2)", "rgba(255, 159, 64, 1)");
const PARTY_PAID_STYLE: DatasetStyle =
    DatasetStyle::new("rgba(255, 99, 132, 0.2)", "rgba(255, 99, 132, 1)");
const PARTY_RECEIVED_STYLE: DatasetStyle =
    DatasetStyle::new("rgba(54, 162, 235, 0.2)", "rgba(54, 162, 235, 1)");

#[derive(Clone)]
pub struct DashboardDataLoader {
    source: Arc<dyn DashboardSource>,
    renderer: Arc<dyn ChartRenderer>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl DashboardDataLoader {
    pub fn new(
        source: Arc<dyn DashboardSource>,
        renderer: Arc<dyn ChartRenderer>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            source,
            renderer,
            diagnostics,
        }
    }

    /// Fetch the payload once and draw all three charts.
    ///
    /// A failed read or undecodable body is reported to the diagnostics
    /// channel and nothing is drawn.
    pub async fn load_and_render(&self) {
        let payload = match self.fetch_payload().await {
            Ok(payload) => payload,
            Err(e) => {
                self.diagnostics.report_failure(&e);
                return;
            }
        };

        let options = ChartOptions::dashboard();
        for plan in build_charts(&payload) {
            debug_assert!(plan.series.is_aligned());
            tracing::debug!(
                "Rendering {} chart on {} ({} labels)",
                plan.kind.as_str(),
                plan.surface,
                plan.series.labels.len()
            );

            if let Err(e) = self
                .renderer
                .render(plan.surface, plan.kind, &plan.series, &options)
            {
                tracing::error!("Error rendering chart {}: {:#}", plan.surface, e);
            }
        }
    }

    async fn fetch_payload(&self) -> Result<DashboardPayload, LoadError> {
        let body = self.source.fetch_body().await?;
        DashboardPayload::from_slice(&body)
    }
}

/// Derive one chart per series group: saddqah as bars, both ledgers as lines.
pub fn build_charts(payload: &DashboardPayload) -> Vec<ChartPlan> {
    let saddqah = ChartSeries::new(
        payload.saddqah.months.clone(),
        vec![Dataset::new(
            "Saddqah Amount",
            payload.saddqah.amounts.clone(),
            SADDQAH_STYLE,
        )],
    );

    vec![
        ChartPlan::new(SADDQAH_SURFACE, ChartKind::Bar, saddqah),
        ChartPlan::new(
            PROJECT_LEDGERS_SURFACE,
            ChartKind::Line,
            ledger_series(&payload.project_ledgers, PROJECT_PAID_STYLE, PROJECT_RECEIVED_STYLE),
        ),
        ChartPlan::new(
            PARTY_PROJECT_LEDGERS_SURFACE,
            ChartKind::Line,
            ledger_series(
                &payload.party_project_ledgers,
                PARTY_PAID_STYLE,
                PARTY_RECEIVED_STYLE,
            ),
        ),
    ]
}

fn ledger_series(
    ledger: &LedgerSeries,
    paid_style: DatasetStyle,
    received_style: DatasetStyle,
) -> ChartSeries {
    ChartSeries::new(
        ledger.months.clone(),
        vec![
            Dataset::new("Paid Amount", ledger.paid_amounts.clone(), paid_style),
            Dataset::new("Received Amount", ledger.received_amounts.clone(), received_style),
        ],
    )
}
