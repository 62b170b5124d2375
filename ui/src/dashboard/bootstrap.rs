//! One pass of chart initialization.
//!
//! Each chart is independent: a missing target skips it without fetching, a
//! failed fetch or render is logged and leaves the other chart alone. Running
//! the pass again overwrites whatever the targets currently show.

use api::{ApiClient, ApiError, MonthlyTrend, PredictionStats};
use dioxus::logger::tracing;

use super::figures::{monthly_trend_figure, prediction_distribution_figure, Figure};
use super::{ChartError, DISTRIBUTION_TARGET, TREND_TARGET};
use crate::core::theme::Theme;

/// Where chart data comes from.
#[allow(async_fn_in_trait)]
pub trait DashboardSource {
    async fn prediction_stats(&self) -> Result<PredictionStats, ApiError>;
    async fn monthly_trend(&self) -> Result<MonthlyTrend, ApiError>;
}

impl DashboardSource for ApiClient {
    async fn prediction_stats(&self) -> Result<PredictionStats, ApiError> {
        ApiClient::prediction_stats(self).await
    }

    async fn monthly_trend(&self) -> Result<MonthlyTrend, ApiError> {
        ApiClient::monthly_trend(self).await
    }
}

/// Draws figures into named targets.
pub trait ChartRenderer {
    fn has_target(&self, target: &str) -> bool;
    fn render(&self, target: &str, figure: &Figure) -> Result<(), ChartError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTargets {
    pub distribution: &'static str,
    pub trend: &'static str,
}

impl Default for ChartTargets {
    fn default() -> Self {
        Self {
            distribution: DISTRIBUTION_TARGET,
            trend: TREND_TARGET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOutcome {
    Skipped,
    Rendered,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartReport {
    pub distribution: ChartOutcome,
    pub trend: ChartOutcome,
}

/// Fetch both datasets concurrently and render each chart. `theme` is read
/// after the data arrives so a switch during the fetch is honored.
pub async fn render_dashboard<S, R, T>(
    source: &S,
    renderer: &R,
    targets: &ChartTargets,
    theme: T,
) -> ChartReport
where
    S: DashboardSource,
    R: ChartRenderer,
    T: Fn() -> Theme,
{
    let distribution = async {
        let target = targets.distribution;
        if !renderer.has_target(target) {
            tracing::debug!(chart = target, "chart target absent, skipping");
            return ChartOutcome::Skipped;
        }
        let result: Result<(), ChartError> = async {
            let stats = source.prediction_stats().await?;
            tracing::debug!(total = stats.total(), "prediction stats loaded");
            renderer.render(target, &prediction_distribution_figure(&stats, theme()))
        }
        .await;
        settle(target, result)
    };

    let trend = async {
        let target = targets.trend;
        if !renderer.has_target(target) {
            tracing::debug!(chart = target, "chart target absent, skipping");
            return ChartOutcome::Skipped;
        }
        let result: Result<(), ChartError> = async {
            let trend = source.monthly_trend().await?;
            renderer.render(target, &monthly_trend_figure(&trend, theme())?)
        }
        .await;
        settle(target, result)
    };

    let (distribution, trend) = futures::join!(distribution, trend);
    ChartReport {
        distribution,
        trend,
    }
}

fn settle(target: &str, result: Result<(), ChartError>) -> ChartOutcome {
    match result {
        Ok(()) => ChartOutcome::Rendered,
        Err(err) => {
            tracing::error!(chart = target, error = %err, "failed to load chart");
            ChartOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::figures::Trace;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeSource {
        stats: Option<PredictionStats>,
        trend: Option<MonthlyTrend>,
        calls: Cell<usize>,
    }

    impl DashboardSource for FakeSource {
        async fn prediction_stats(&self) -> Result<PredictionStats, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.stats.ok_or_else(|| ApiError::Status {
                url: "/api/prediction-stats".into(),
                status: 500,
            })
        }

        async fn monthly_trend(&self) -> Result<MonthlyTrend, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.trend.clone().ok_or_else(|| ApiError::Decode {
                url: "/api/monthly-trend".into(),
                message: "expected value at line 1 column 1".into(),
            })
        }
    }

    struct RecordingRenderer {
        targets: Vec<&'static str>,
        drawn: RefCell<Vec<(String, Figure)>>,
    }

    impl RecordingRenderer {
        fn with_targets(targets: &[&'static str]) -> Self {
            Self {
                targets: targets.to_vec(),
                drawn: RefCell::default(),
            }
        }

        fn drawn_targets(&self) -> Vec<String> {
            self.drawn.borrow().iter().map(|(t, _)| t.clone()).collect()
        }
    }

    impl ChartRenderer for RecordingRenderer {
        fn has_target(&self, target: &str) -> bool {
            self.targets.iter().any(|known| *known == target)
        }

        fn render(&self, target: &str, figure: &Figure) -> Result<(), ChartError> {
            self.drawn
                .borrow_mut()
                .push((target.to_string(), figure.clone()));
            Ok(())
        }
    }

    fn healthy_source() -> FakeSource {
        FakeSource {
            stats: Some(PredictionStats {
                no_churn: 80,
                churn: 20,
            }),
            trend: Some(MonthlyTrend {
                months: vec!["Jan".into(), "Feb".into()],
                counts: vec![5, 9],
            }),
            ..FakeSource::default()
        }
    }

    #[test]
    fn renders_both_charts_when_targets_exist() {
        let source = healthy_source();
        let renderer = RecordingRenderer::with_targets(&[DISTRIBUTION_TARGET, TREND_TARGET]);

        let report = block_on(render_dashboard(
            &source,
            &renderer,
            &ChartTargets::default(),
            || Theme::Light,
        ));

        assert_eq!(report.distribution, ChartOutcome::Rendered);
        assert_eq!(report.trend, ChartOutcome::Rendered);
        let mut drawn = renderer.drawn_targets();
        drawn.sort();
        assert_eq!(drawn, vec!["monthly-trend", "prediction-distribution"]);
    }

    #[test]
    fn absent_target_is_skipped_without_fetching() {
        let source = healthy_source();
        let renderer = RecordingRenderer::with_targets(&[TREND_TARGET]);

        let report = block_on(render_dashboard(
            &source,
            &renderer,
            &ChartTargets::default(),
            || Theme::Light,
        ));

        assert_eq!(report.distribution, ChartOutcome::Skipped);
        assert_eq!(report.trend, ChartOutcome::Rendered);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn one_failed_fetch_leaves_the_other_chart_alone() {
        let source = FakeSource {
            stats: None,
            ..healthy_source()
        };
        let renderer = RecordingRenderer::with_targets(&[DISTRIBUTION_TARGET, TREND_TARGET]);

        let report = block_on(render_dashboard(
            &source,
            &renderer,
            &ChartTargets::default(),
            || Theme::Light,
        ));

        assert_eq!(report.distribution, ChartOutcome::Failed);
        assert_eq!(report.trend, ChartOutcome::Rendered);
        assert_eq!(renderer.drawn_targets(), vec!["monthly-trend"]);
    }

    #[test]
    fn misaligned_trend_fails_without_drawing() {
        let source = FakeSource {
            trend: Some(MonthlyTrend {
                months: vec!["Jan".into()],
                counts: vec![],
            }),
            ..healthy_source()
        };
        let renderer = RecordingRenderer::with_targets(&[TREND_TARGET]);

        let report = block_on(render_dashboard(
            &source,
            &renderer,
            &ChartTargets::default(),
            || Theme::Light,
        ));

        assert_eq!(report.trend, ChartOutcome::Failed);
        assert!(renderer.drawn_targets().is_empty());
    }

    #[test]
    fn rerun_redraws_with_the_current_theme() {
        let source = healthy_source();
        let renderer = RecordingRenderer::with_targets(&[DISTRIBUTION_TARGET]);
        let theme = Cell::new(Theme::Light);
        let targets = ChartTargets::default();

        block_on(render_dashboard(&source, &renderer, &targets, || theme.get()));
        theme.set(Theme::Dark);
        block_on(render_dashboard(&source, &renderer, &targets, || theme.get()));

        let drawn = renderer.drawn.borrow();
        assert_eq!(drawn.len(), 2);
        assert_eq!(drawn[0].1.layout.font.color, "#1e293b");
        assert_eq!(drawn[1].1.layout.font.color, "#ffffff");
        assert!(matches!(drawn[1].1.data[0], Trace::Bar { .. }));
    }
}
