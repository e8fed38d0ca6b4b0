// Dashboard payload as served by /api/dashboard-data/
use super::error::LoadError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub saddqah: SaddqahSeries,
    pub project_ledgers: LedgerSeries,
    pub party_project_ledgers: LedgerSeries,
}

/// Monthly saddqah totals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaddqahSeries {
    pub months: Vec<String>,
    pub amounts: Vec<f64>,
}

/// Monthly paid/received totals for a ledger.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSeries {
    pub months: Vec<String>,
    pub paid_amounts: Vec<f64>,
    pub received_amounts: Vec<f64>,
}

impl DashboardPayload {
    /// Decode a response body and check that every group is index-aligned.
    pub fn from_slice(body: &[u8]) -> Result<Self, LoadError> {
        let payload: Self = serde_json::from_slice(body)?;
        payload.validate()?;
        Ok(payload)
    }

    fn validate(&self) -> Result<(), LoadError> {
        check_aligned("saddqah", &self.saddqah.months, "amounts", &self.saddqah.amounts)?;
        self.project_ledgers.validate("projectLedgers")?;
        self.party_project_ledgers.validate("partyProjectLedgers")
    }
}

impl LedgerSeries {
    fn validate(&self, group: &'static str) -> Result<(), LoadError> {
        check_aligned(group, &self.months, "paidAmounts", &self.paid_amounts)?;
        check_aligned(group, &self.months, "receivedAmounts", &self.received_amounts)
    }
}

fn check_aligned(
    group: &'static str,
    labels: &[String],
    series: &'static str,
    values: &[f64],
) -> Result<(), LoadError> {
    if labels.len() != values.len() {
        return Err(LoadError::Inconsistent {
            group,
            series,
            labels: labels.len(),
            values: values.len(),
        });
    }
    Ok(())
}
