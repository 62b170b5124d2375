//! Banner stack rendered at the top of the main container.

use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use uuid::Uuid;

use crate::core::alerts::{AlertBanner, AlertBoard, Severity};
use crate::core::config::{DashboardConfig, FlashMessage};

#[derive(Clone)]
pub struct AlertContext {
    pub board: Rc<AlertBoard>,
    pub banners: Signal<Vec<AlertBanner>>,
}

impl AlertContext {
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> Uuid {
        self.board.show(message, severity)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.board.dismiss(id);
    }
}

/// Create the board, adopt the page's flash messages and share it.
pub fn use_alert_provider(config: &DashboardConfig) -> AlertContext {
    let flash = config.flash.clone();
    let display_ms = config.alert_display_ms;
    let fade_ms = config.alert_fade_ms;

    let board = use_hook(move || {
        let board = AlertBoard::new(display_ms, fade_ms);
        board.adopt(flash.iter().map(FlashMessage::to_banner));
        Rc::new(board)
    });

    let banners = use_signal({
        let board = board.clone();
        move || board.banners()
    });

    use_hook({
        let board = board.clone();
        move || {
            board.set_listener(move |snapshot| {
                let mut banners = banners;
                banners.set(snapshot.to_vec());
            });
        }
    });

    use_context_provider(|| AlertContext { board, banners })
}

/// Show a banner if an alert container is mounted; otherwise do nothing.
pub fn show_alert(message: impl Into<String>, severity: Severity) -> Option<Uuid> {
    match try_consume_context::<AlertContext>() {
        Some(ctx) => Some(ctx.show(message, severity)),
        None => {
            tracing::debug!("no alert container mounted, dropping alert");
            None
        }
    }
}

#[component]
pub fn AlertStack() -> Element {
    let Some(ctx) = try_use_context::<AlertContext>() else {
        return rsx! {};
    };
    let banners = (ctx.banners)();

    rsx! {
        for banner in banners {
            AlertItem { key: "{banner.id}", banner: banner.clone() }
        }
    }
}

#[component]
fn AlertItem(banner: AlertBanner) -> Element {
    let ctx = use_context::<AlertContext>();
    let id = banner.id;

    rsx! {
        div { class: banner.class_name(), style: banner.style(), role: "alert",
            "{banner.message}"
            button {
                r#type: "button",
                class: "btn-close",
                "aria-label": "Close",
                onclick: move |_| ctx.dismiss(id),
            }
        }
    }
}
