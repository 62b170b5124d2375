//! Dark/light theme: persisted preference, applied state and redraw fan-out.
//!
//! The preference is a tri-state. A stored `"true"`/`"false"` wins; an absent
//! key defers to the platform's `prefers-color-scheme` hint, which is never
//! written back. Switching themes persists the choice and, after a short settle
//! delay, asks every registered chart to redraw with the new palette.

use std::cell::Cell;

use dioxus::logger::tracing;

use super::redraw::RedrawRegistry;
use super::storage::{PreferenceStore, StorageError};
use super::tasks::TaskScope;
use super::timing::sleep_ms;

pub const DEFAULT_STORAGE_KEY: &str = "darkMode";
pub const THEME_SETTLE_MS: u64 = 100;
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Stylesheet mounted while dark mode is active. Forces all foreground text
/// to white, third-party widgets included.
pub const DARK_MODE_OVERRIDES: &str = r#"
body.dark-mode, body.dark-mode * {
  color: #ffffff !important;
}
body.dark-mode .btn {
  color: white !important;
}
body.dark-mode .badge-danger {
  color: white !important;
  background-color: #dc2626 !important;
}
body.dark-mode .badge-success {
  color: white !important;
  background-color: #10b981 !important;
}
body.dark-mode .table {
  background-color: #1e293b !important;
}
body.dark-mode .card {
  background-color: #1e293b !important;
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Class carried by `<body>` while this theme is applied.
    pub fn body_class(self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_MODE_CLASS)
    }

    /// Font Awesome icon for the toggle: the action a click performs next.
    pub fn toggle_icon(self) -> &'static str {
        if self.is_dark() {
            "fa-sun"
        } else {
            "fa-moon"
        }
    }

    pub fn toggle_title(self) -> &'static str {
        if self.is_dark() {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
    Unset,
}

impl ThemePreference {
    fn decode(raw: Option<&str>) -> Self {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Self::Unset,
            Some(raw) => raw,
        };
        match serde_json::from_str::<bool>(raw) {
            Ok(true) => Self::Dark,
            Ok(false) => Self::Light,
            Err(_) => {
                tracing::warn!(value = raw, "ignoring malformed theme preference");
                Self::Unset
            }
        }
    }

    pub fn resolve(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::Unset => system_prefers_dark,
        }
    }
}

/// The persisted theme flag under a fixed key.
#[derive(Debug)]
pub struct ThemeStore<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemeStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn stored(&self) -> ThemePreference {
        ThemePreference::decode(self.store.get(&self.key).as_deref())
    }

    /// Effective dark flag: the stored choice, else the platform hint.
    pub fn preference(&self, system_prefers_dark: bool) -> bool {
        self.stored().resolve(system_prefers_dark)
    }

    pub fn set_preference(&self, dark: bool) -> Result<(), StorageError> {
        self.store
            .set(&self.key, if dark { "true" } else { "false" })
    }
}

#[derive(Debug)]
pub struct ThemeController<S> {
    store: ThemeStore<S>,
    current: Cell<Theme>,
    redraws: RedrawRegistry,
    settle_ms: u64,
    tasks: TaskScope,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: ThemeStore<S>, settle_ms: u64) -> Self {
        Self {
            store,
            current: Cell::new(Theme::Light),
            redraws: RedrawRegistry::new(),
            settle_ms,
            tasks: TaskScope::new(),
        }
    }

    /// Resolve and apply the startup theme. Nothing is persisted and no redraw
    /// is requested: charts have not rendered yet.
    pub fn initialize(&self, system_prefers_dark: bool) -> Theme {
        let theme = Theme::from_dark(self.store.preference(system_prefers_dark));
        self.current.set(theme);
        theme
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    pub fn toggle(&self) -> Result<Theme, StorageError> {
        let next = self.current().toggled();
        self.apply(next)?;
        Ok(next)
    }

    /// Apply `theme`, persist it and schedule the redraw fan-out.
    ///
    /// The theme stays applied when persisting fails; the redraw for this
    /// switch is skipped and the error is returned.
    pub fn apply(&self, theme: Theme) -> Result<(), StorageError> {
        self.current.set(theme);
        self.store.set_preference(theme.is_dark())?;
        self.schedule_redraw();
        Ok(())
    }

    pub fn redraws(&self) -> &RedrawRegistry {
        &self.redraws
    }

    pub fn store(&self) -> &ThemeStore<S> {
        &self.store
    }

    fn schedule_redraw(&self) {
        let redraws = self.redraws.clone();
        let settle_ms = self.settle_ms;
        tracing::trace!(pending = self.tasks.pending(), "scheduling theme redraw");
        self.tasks.spawn(async move {
            sleep_ms(settle_ms).await;
            let notified = redraws.notify();
            tracing::debug!(notified, "theme switch redraw");
        });
    }
}
