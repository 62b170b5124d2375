//! Dashboard chart cards bound to the theme redraw registry.

use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use super::bootstrap::{render_dashboard, ChartTargets};
use super::plotly::PlotlyRenderer;
use super::{DISTRIBUTION_TARGET, TREND_TARGET};
use crate::components::theme_toggle::use_theme;
use crate::core::config::DashboardConfig;

/// The two dashboard chart cards. Data is fetched after mount and again after
/// every theme switch so the palette follows the theme.
#[component]
pub fn DashboardCharts() -> Element {
    let theme = use_theme();
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();
    let generation = use_signal(|| 0_u64);

    // Held for the component's lifetime; dropping it unregisters the redraw.
    let _redraw = use_hook(|| {
        let handle = theme.controller.redraws().register(move || {
            let mut generation = generation;
            generation += 1;
        });
        Rc::new(handle)
    });

    let theme_signal = theme.theme;
    use_effect(move || {
        let pass = generation();
        let client = config.api_client();
        spawn(async move {
            let report = render_dashboard(
                &client,
                &PlotlyRenderer,
                &ChartTargets::default(),
                || *theme_signal.peek(),
            )
            .await;
            tracing::debug!(pass, ?report, "dashboard charts initialized");
        });
    });

    rsx! {
        div { class: "row g-4",
            div { class: "col-lg-6",
                div { class: "card chart-card",
                    div { class: "card-body",
                        div { id: DISTRIBUTION_TARGET, class: "chart" }
                    }
                }
            }
            div { class: "col-lg-6",
                div { class: "card chart-card",
                    div { class: "card-body",
                        div { id: TREND_TARGET, class: "chart" }
                    }
                }
            }
        }
    }
}
