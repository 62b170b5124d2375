//! Dashboard charts: theme-aware Plotly figures fed by the JSON endpoints.
//!
//! [`bootstrap::render_dashboard`] fetches both datasets concurrently, builds
//! one [`figures::Figure`] per dataset with [`layout::plot_layout`] and hands
//! them to a [`bootstrap::ChartRenderer`]. [`charts::DashboardCharts`] is the
//! component that drives it and re-runs it after every theme switch.

use thiserror::Error;

pub mod bootstrap;
pub mod charts;
pub mod figures;
pub mod layout;
pub mod plotly;

pub use bootstrap::{render_dashboard, ChartOutcome, ChartReport, ChartTargets};
pub use charts::DashboardCharts;

pub const DISTRIBUTION_TARGET: &str = "prediction-distribution";
pub const TREND_TARGET: &str = "monthly-trend";

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("trend series are misaligned: {months} months, {counts} counts")]
    MismatchedSeries { months: usize, counts: usize },
    #[error("failed to render `{target}`: {message}")]
    Render { target: String, message: String },
    #[error(transparent)]
    Api(#[from] api::ApiError),
}
