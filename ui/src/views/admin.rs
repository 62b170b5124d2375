use dioxus::prelude::*;

use crate::dashboard::DashboardCharts;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        section { class: "page page-admin",
            h1 { class: "h3", "Admin Dashboard" }
            p { "Prediction volume across all users." }
            DashboardCharts {}
        }
    }
}
