use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::components::{use_alert_provider, use_theme_provider, AlertStack, AppNavbar};
use ui::core::config::DashboardConfig;
use ui::views::{AdminDashboard, BulkPredict, Dashboard, History, Predict};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    DashboardPage {},
    #[route("/predict")]
    PredictPage {},
    #[route("/history")]
    HistoryPage {},
    #[route("/bulk-predict")]
    BulkPredictPage {},
    #[route("/admin/dashboard")]
    AdminPage {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

fn main() {
    // Only fails when a subscriber is already installed.
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = DashboardConfig::load();
        tracing::info!(api_base = %config.api_base, "dashboard config loaded");
        config
    });
    use_context_provider(|| config.clone());
    use_theme_provider(&config);
    use_alert_provider(&config);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Script { src: BOOTSTRAP_JS }
        document::Script { src: PLOTLY_JS }

        Router::<Route> {}
    }
}

/// Navbar, alert stack and the routed page.
#[component]
fn Shell() -> Element {
    let current_path = use_route::<Route>().to_string();

    rsx! {
        AppNavbar { current_path }
        main { class: "container main-container",
            AlertStack {}
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { Dashboard {} }
}

#[component]
fn DashboardPage() -> Element {
    rsx! { Dashboard {} }
}

#[component]
fn PredictPage() -> Element {
    rsx! { Predict {} }
}

#[component]
fn HistoryPage() -> Element {
    rsx! { History {} }
}

#[component]
fn BulkPredictPage() -> Element {
    rsx! { BulkPredict {} }
}

#[component]
fn AdminPage() -> Element {
    rsx! { AdminDashboard {} }
}
