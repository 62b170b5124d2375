#![cfg(test)]
/*!
Selector contract for the shared dashboard theme (`ui/assets/theme/main.css`).

Components render class names that the stylesheet must style: the active nav
link, validation state, chart cards, alert severities and the dark palette. A
substring check catches a renamed or dropped selector before it ships.

If a selector is renamed on purpose, update the component markup and
REQUIRED_SELECTORS together.
*/

use ui::core::forms::{VALIDATED_CLASS, VALIDATION_MARKER_CLASS};
use ui::core::theme::DARK_MODE_CLASS;

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".main-container",
    // Navigation
    ".nav-feature {",
    ".nav-feature.active",
    ".theme-toggle",
    // Charts
    ".chart-card",
    ".chart {",
    // Alerts, one per severity
    ".alert {",
    ".alert-success",
    ".alert-danger",
    ".alert-warning",
    ".alert-info",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn class_constants_are_styled() {
    for class in [DARK_MODE_CLASS, VALIDATION_MARKER_CLASS, VALIDATED_CLASS] {
        assert!(
            THEME_CSS.contains(&format!(".{class}")),
            "theme has no rule for `.{class}`"
        );
    }
}

#[test]
fn dark_mode_restyles_alerts() {
    for severity in ["success", "danger", "warning", "info"] {
        let selector = format!("body.dark-mode .alert-{severity}");
        assert!(THEME_CSS.contains(&selector), "missing `{selector}`");
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_500,
        "theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
