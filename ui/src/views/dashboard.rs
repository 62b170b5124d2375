use dioxus::prelude::*;

use crate::components::widgets::{use_tooltips, ScrollLink};
use crate::dashboard::DashboardCharts;

#[component]
pub fn Dashboard() -> Element {
    use_tooltips();

    rsx! {
        section { class: "page page-dashboard",
            div { class: "d-flex justify-content-between align-items-center mb-4",
                h1 { class: "h3 mb-0", "Dashboard" }
                ScrollLink { target: "charts", class: "btn btn-outline-primary btn-sm",
                    i { class: "fas fa-chart-bar me-1", aria_hidden: "true" }
                    "Jump to charts"
                }
            }
            p {
                span {
                    "data-bs-toggle": "tooltip",
                    title: "Counts include every prediction you have made",
                    "Overview of churn predictions and their monthly volume."
                }
            }
            div { id: "charts", DashboardCharts {} }
        }
    }
}
