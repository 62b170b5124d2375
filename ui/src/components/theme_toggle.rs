//! Theme context and the navbar toggle button.
//!
//! `use_theme_provider` is called once at the app root. It resolves the
//! startup theme, mirrors it onto `<body class="dark-mode">` and shares a
//! [`ThemeContext`] with every descendant.

use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::core::config::DashboardConfig;
use crate::core::platform;
use crate::core::storage::DefaultStore;
use crate::core::theme::{
    Theme, ThemeController, ThemeStore, DARK_MODE_CLASS, DARK_MODE_OVERRIDES,
};

#[derive(Clone)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub controller: Rc<ThemeController<DefaultStore>>,
}

impl ThemeContext {
    pub fn current(&self) -> Theme {
        (self.theme)()
    }

    /// Flip the theme. A failed write is logged; the new theme stays applied.
    pub fn toggle(&self) {
        let mut theme = self.theme;
        if let Err(err) = self.controller.toggle() {
            tracing::error!(error = %err, "failed to persist theme preference");
        }
        theme.set(self.controller.current());
    }
}

pub fn use_theme_provider(config: &DashboardConfig) -> ThemeContext {
    let storage_key = config.storage_key.clone();
    let settle_ms = config.theme_settle_ms;
    let controller = use_hook(move || {
        let store = ThemeStore::new(DefaultStore::new(), storage_key);
        Rc::new(ThemeController::new(store, settle_ms))
    });

    let theme = use_signal({
        let controller = controller.clone();
        move || controller.initialize(platform::prefers_dark_scheme())
    });

    use_effect(move || {
        platform::set_body_class(DARK_MODE_CLASS, theme().is_dark());
    });

    use_context_provider(|| ThemeContext { theme, controller })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> Element {
    let ctx = use_theme();
    let theme = ctx.current();
    let icon = theme.toggle_icon();

    rsx! {
        if theme.is_dark() {
            document::Style { "{DARK_MODE_OVERRIDES}" }
        }
        button {
            id: "theme-toggle",
            class: "btn btn-link nav-link theme-toggle",
            r#type: "button",
            title: theme.toggle_title(),
            onclick: move |_| ctx.toggle(),
            i { class: "fas {icon}" }
        }
    }
}
