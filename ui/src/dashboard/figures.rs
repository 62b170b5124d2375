//! Plotly figures for the two dashboard charts.

use api::{MonthlyTrend, PredictionStats};
use serde::Serialize;

use super::layout::{plot_layout, PlotLayout};
use super::ChartError;
use crate::core::theme::Theme;

pub const NO_CHURN_COLOR: &str = "#10b981";
pub const CHURN_COLOR: &str = "#ef4444";
pub const TREND_COLOR: &str = "#667eea";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarMarker {
    pub color: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: &'static str,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar {
        x: Vec<String>,
        y: Vec<u64>,
        marker: BarMarker,
    },
    Scatter {
        x: Vec<String>,
        y: Vec<u64>,
        mode: &'static str,
        line: Line,
        marker: Marker,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlotConfig {
    pub responsive: bool,
}

/// Everything `Plotly.newPlot` needs besides the target id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: PlotLayout,
    pub config: PlotConfig,
}

impl Figure {
    fn single(trace: Trace, layout: PlotLayout) -> Self {
        Self {
            data: vec![trace],
            layout,
            config: PlotConfig { responsive: true },
        }
    }
}

pub fn prediction_distribution_figure(stats: &PredictionStats, theme: Theme) -> Figure {
    let trace = Trace::Bar {
        x: vec!["No Churn".to_string(), "Churn".to_string()],
        y: vec![stats.no_churn, stats.churn],
        marker: BarMarker {
            color: vec![NO_CHURN_COLOR, CHURN_COLOR],
        },
    };
    Figure::single(
        trace,
        plot_layout("Prediction Distribution", "Prediction", "Count", theme),
    )
}

/// Line chart of predictions per month. Misaligned series are rejected rather
/// than silently truncated.
pub fn monthly_trend_figure(trend: &MonthlyTrend, theme: Theme) -> Result<Figure, ChartError> {
    if !trend.is_aligned() {
        return Err(ChartError::MismatchedSeries {
            months: trend.months.len(),
            counts: trend.counts.len(),
        });
    }

    let (x, y): (Vec<String>, Vec<u64>) = trend
        .points()
        .map(|(month, count)| (month.to_string(), count))
        .unzip();
    let trace = Trace::Scatter {
        x,
        y,
        mode: "lines+markers",
        line: Line {
            color: TREND_COLOR,
            width: 3,
        },
        marker: Marker {
            color: TREND_COLOR,
            size: 8,
        },
    };
    Ok(Figure::single(
        trace,
        plot_layout(
            "Monthly Predictions Trend",
            "Month",
            "Number of Predictions",
            theme,
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn distribution_is_a_green_red_bar_pair() {
        let stats = PredictionStats {
            no_churn: 80,
            churn: 20,
        };
        let figure = prediction_distribution_figure(&stats, Theme::Light);
        let value = serde_json::to_value(&figure).unwrap();

        assert_eq!(
            value["data"],
            json!([{
                "type": "bar",
                "x": ["No Churn", "Churn"],
                "y": [80, 20],
                "marker": {"color": ["#10b981", "#ef4444"]}
            }])
        );
        assert_eq!(value["layout"]["title"]["text"], "Prediction Distribution");
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Prediction");
        assert_eq!(value["layout"]["yaxis"]["title"]["text"], "Count");
        assert_eq!(value["config"], json!({"responsive": true}));
    }

    #[test]
    fn trend_plots_each_month_against_its_count() {
        let trend = MonthlyTrend {
            months: vec!["Jan".into(), "Feb".into()],
            counts: vec![5, 9],
        };
        let figure = monthly_trend_figure(&trend, Theme::Dark).unwrap();
        let value = serde_json::to_value(&figure).unwrap();

        assert_eq!(
            value["data"][0],
            json!({
                "type": "scatter",
                "x": ["Jan", "Feb"],
                "y": [5, 9],
                "mode": "lines+markers",
                "line": {"color": "#667eea", "width": 3},
                "marker": {"color": "#667eea", "size": 8}
            })
        );
        assert_eq!(value["layout"]["title"]["text"], "Monthly Predictions Trend");
        assert_eq!(value["layout"]["title"]["font"]["color"], "#ffffff");
    }

    #[test]
    fn empty_trend_is_still_a_figure() {
        let figure = monthly_trend_figure(&MonthlyTrend::default(), Theme::Light).unwrap();
        let value = serde_json::to_value(&figure).unwrap();
        assert_eq!(value["data"][0]["x"], json!([]));
    }

    #[test]
    fn misaligned_trend_is_rejected() {
        let trend = MonthlyTrend {
            months: vec!["Jan".into(), "Feb".into(), "Mar".into()],
            counts: vec![5, 9],
        };
        match monthly_trend_figure(&trend, Theme::Light) {
            Err(ChartError::MismatchedSeries { months, counts }) => {
                assert_eq!((months, counts), (3, 2));
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }
}
