//! Bootstrap tooltip wiring and smooth in-page anchors.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::core::platform;

const TOOLTIP_INIT_JS: &str = r#"
if (typeof bootstrap !== "undefined" && bootstrap.Tooltip) {
  document.querySelectorAll('[data-bs-toggle="tooltip"]').forEach((el) => {
    bootstrap.Tooltip.getOrCreateInstance(el);
  });
}
"#;

/// Attach Bootstrap tooltips to `[data-bs-toggle="tooltip"]` elements after
/// the calling component renders. Safe to run repeatedly.
pub fn use_tooltips() {
    use_effect(|| {
        let _ = document::eval(TOOLTIP_INIT_JS);
    });
}

/// In-page anchor that smooth-scrolls to `target` instead of jumping.
#[component]
pub fn ScrollLink(
    #[props(into)] target: String,
    #[props(into)] class: Option<String>,
    children: Element,
) -> Element {
    let href = format!("#{target}");

    rsx! {
        a {
            href,
            class,
            onclick: move |evt| {
                evt.prevent_default();
                if !platform::scroll_into_view(&target) {
                    tracing::debug!(anchor = %target, "scroll target missing");
                }
            },
            {children}
        }
    }
}
