//! Platform glue: task spawning and browser signals.

use std::future::Future;

/// Spawn a `!Send` future on the current thread's executor.
///
/// Web: `wasm_bindgen_futures::spawn_local`. Native: `tokio::task::spawn_local`,
/// which requires a `LocalSet` (tests drive one explicitly).
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(future);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::task::spawn_local(future);
    }
}

/// The `prefers-color-scheme: dark` media query. Always `false` off the web.
pub fn prefers_dark_scheme() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Text content of the element with `id`, if the host page provides one.
pub fn element_text(id: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.text_content())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

/// Add or remove `class` on `<body>`. No-op off the web.
pub fn set_body_class(class: &str, on: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.body())
        else {
            return;
        };
        if body.class_list().toggle_with_force(class, on).is_err() {
            dioxus::logger::tracing::warn!(class, "unable to update body class");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (class, on);
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport. Returns
/// `false` when there is no such element.
pub fn scroll_into_view(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
        else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}
