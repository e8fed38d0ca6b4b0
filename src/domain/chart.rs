// Render-ready chart models
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

/// Fixed presentation metadata attached to a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetStyle {
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u32,
}

impl DatasetStyle {
    pub const fn new(background_color: &'static str, border_color: &'static str) -> Self {
        Self {
            background_color,
            border_color,
            border_width: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub style: DatasetStyle,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>, style: DatasetStyle) -> Self {
        Self {
            label: label.into(),
            data,
            style,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self { labels, datasets }
    }

    /// True when every dataset has one value per label
    pub fn is_aligned(&self) -> bool {
        self.datasets.iter().all(|d| d.data.len() == self.labels.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub y_begin_at_zero: bool,
}

impl ChartOptions {
    /// Options shared by every dashboard chart.
    pub const fn dashboard() -> Self {
        Self {
            responsive: true,
            y_begin_at_zero: true,
        }
    }
}

/// One chart to draw: where, how, and what.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub surface: &'static str,
    pub kind: ChartKind,
    pub series: ChartSeries,
}

impl ChartPlan {
    pub fn new(surface: &'static str, kind: ChartKind, series: ChartSeries) -> Self {
        Self {
            surface,
            kind,
            series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: DatasetStyle = DatasetStyle::new("rgba(0, 0, 0, 0.2)", "rgba(0, 0, 0, 1)");

    #[test]
    fn test_kind_names() {
        assert_eq!(ChartKind::Bar.as_str(), "bar");
        assert_eq!(ChartKind::Line.as_str(), "line");
        assert_eq!(serde_json::to_value(ChartKind::Line).unwrap(), "line");
    }

    #[test]
    fn test_alignment() {
        let series = ChartSeries::new(
            vec!["Jan".to_string(), "Feb".to_string()],
            vec![
                Dataset::new("Paid Amount", vec![5.0, 7.0], STYLE),
                Dataset::new("Received Amount", vec![3.0, 4.0], STYLE),
            ],
        );
        assert!(series.is_aligned());

        let short = ChartSeries::new(
            vec!["Jan".to_string()],
            vec![Dataset::new("Paid Amount", vec![], STYLE)],
        );
        assert!(!short.is_aligned());
    }

    #[test]
    fn test_style_border_width() {
        assert_eq!(STYLE.border_width, 1);
    }
}
