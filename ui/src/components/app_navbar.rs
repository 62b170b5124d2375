use dioxus::prelude::*;

use super::theme_toggle::ThemeToggle;
use crate::core::nav::{active_index, FEATURE_LINKS};

/// Top navigation. `current_path` is the router's path for this render; at
/// most one feature link is marked active.
#[component]
pub fn AppNavbar(current_path: String) -> Element {
    let active = active_index(&current_path, &FEATURE_LINKS);

    let items = FEATURE_LINKS.iter().enumerate().map(|(idx, link)| {
        let class = if active == Some(idx) {
            "nav-link nav-feature active"
        } else {
            "nav-link nav-feature"
        };
        rsx! {
            li { key: "{link.href}", class: "nav-item",
                Link { class, to: link.href.to_string(),
                    i { class: "fas {link.icon} me-1", aria_hidden: "true" }
                    "{link.label}"
                }
            }
        }
    });

    rsx! {
        nav { class: "navbar navbar-expand-lg navbar-dark bg-primary",
            div { class: "container-fluid",
                Link { class: "navbar-brand", to: "/".to_string(),
                    i { class: "fas fa-chart-pie me-2", aria_hidden: "true" }
                    "Churnlens"
                }
                ul { class: "navbar-nav me-auto", {items} }
                ThemeToggle {}
            }
        }
    }
}
