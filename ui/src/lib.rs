//! Shared UI crate for Churnlens: dashboard logic, chart pipeline, components
//! and views. Platform crates only add routing and launch.

use dioxus::prelude::*;

pub mod core;
pub mod dashboard;
pub mod views;

pub mod components {
    // Navbar with active-link highlighting (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Theme context + toggle button (components/theme_toggle.rs)
    pub mod theme_toggle;
    pub use theme_toggle::{use_theme, use_theme_provider, ThemeContext, ThemeToggle};

    // Flash/transient banners (components/alerts.rs)
    pub mod alerts;
    pub use alerts::{show_alert, use_alert_provider, AlertContext, AlertStack};

    pub mod forms;
    pub use forms::{PredictionForm, PredictionSubmitButton, ValidatedForm};

    pub mod widgets;
    pub use widgets::{use_tooltips, ScrollLink};
}

/// Dashboard stylesheet (Bootstrap overrides, dark mode palette).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
