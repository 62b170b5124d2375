//! Transient notification banners.
//!
//! Every banner, whether present at load or raised later, follows the same
//! schedule: visible for the display window, then faded to zero opacity, then
//! removed once the fade has played. Banners are independent of each other.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use dioxus::logger::tracing;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tasks::TaskScope;
use super::timing::sleep_ms;

pub const ALERT_DISPLAY_MS: u64 = 5_000;
pub const ALERT_FADE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "info" | "message" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "danger" | "error" => Ok(Self::Danger),
            other => Err(format!("unknown alert severity `{other}`")),
        }
    }
}

/// Flash categories from the server. Unknown categories render as `Info`.
impl From<String> for Severity {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or_else(|err: String| {
            tracing::warn!(error = %err, "falling back to info severity");
            Self::Info
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertBanner {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
    pub phase: AlertPhase,
}

impl AlertBanner {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
            phase: AlertPhase::Visible,
        }
    }

    pub fn class_name(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible fade show",
            self.severity.as_str()
        )
    }

    /// Inline style for the current phase (`opacity: 0` while fading).
    pub fn style(&self) -> &'static str {
        match self.phase {
            AlertPhase::Visible => "",
            AlertPhase::Fading => "opacity: 0",
        }
    }
}

type Listener = Rc<dyn Fn(&[AlertBanner])>;

struct BoardInner {
    banners: Vec<AlertBanner>,
    listener: Option<Listener>,
}

impl BoardInner {
    fn changed(this: &RefCell<Self>) {
        let (listener, snapshot) = {
            let inner = this.borrow();
            (inner.listener.clone(), inner.banners.clone())
        };
        if let Some(listener) = listener {
            listener(&snapshot);
        }
    }
}

/// The set of banners rendered in the main container.
pub struct AlertBoard {
    inner: Rc<RefCell<BoardInner>>,
    display_ms: u64,
    fade_ms: u64,
    tasks: TaskScope,
}

impl AlertBoard {
    pub fn new(display_ms: u64, fade_ms: u64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(BoardInner {
                banners: Vec::new(),
                listener: None,
            })),
            display_ms,
            fade_ms,
            tasks: TaskScope::new(),
        }
    }

    /// Called with a snapshot after every change.
    pub fn set_listener(&self, listener: impl Fn(&[AlertBanner]) + 'static) {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn banners(&self) -> Vec<AlertBanner> {
        self.inner.borrow().banners.clone()
    }

    /// Take over banners that were present when the page loaded, keeping
    /// their order, and schedule their removal.
    pub fn adopt<I>(&self, banners: I)
    where
        I: IntoIterator<Item = AlertBanner>,
    {
        let adopted: Vec<AlertBanner> = banners.into_iter().collect();
        if adopted.is_empty() {
            return;
        }
        let ids: Vec<Uuid> = adopted.iter().map(|b| b.id).collect();
        self.inner.borrow_mut().banners.extend(adopted);
        BoardInner::changed(&self.inner);
        for id in ids {
            self.schedule_removal(id);
        }
    }

    /// Insert a banner ahead of all others and schedule its removal.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> Uuid {
        let banner = AlertBanner::new(message, severity);
        let id = banner.id;
        self.inner.borrow_mut().banners.insert(0, banner);
        BoardInner::changed(&self.inner);
        self.schedule_removal(id);
        id
    }

    /// Remove a banner right away. Returns `false` if it was already gone.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let removed = remove_banner(&self.inner, id);
        if removed {
            BoardInner::changed(&self.inner);
        }
        removed
    }

    fn schedule_removal(&self, id: Uuid) {
        let board: Weak<RefCell<BoardInner>> = Rc::downgrade(&self.inner);
        let display_ms = self.display_ms;
        let fade_ms = self.fade_ms;

        self.tasks.spawn(async move {
            sleep_ms(display_ms).await;
            let Some(inner) = board.upgrade() else { return };
            let faded = {
                let mut guard = inner.borrow_mut();
                match guard.banners.iter_mut().find(|b| b.id == id) {
                    Some(banner) => {
                        banner.phase = AlertPhase::Fading;
                        true
                    }
                    None => false,
                }
            };
            if !faded {
                return;
            }
            BoardInner::changed(&inner);
            drop(inner);

            sleep_ms(fade_ms).await;
            let Some(inner) = board.upgrade() else { return };
            if remove_banner(&inner, id) {
                BoardInner::changed(&inner);
            }
        });
    }
}

fn remove_banner(inner: &RefCell<BoardInner>, id: Uuid) -> bool {
    let mut guard = inner.borrow_mut();
    let before = guard.banners.len();
    guard.banners.retain(|b| b.id != id);
    guard.banners.len() != before
}

impl fmt::Debug for AlertBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertBoard")
            .field("banners", &self.inner.borrow().banners)
            .field("display_ms", &self.display_ms)
            .field("fade_ms", &self.fade_ms)
            .finish()
    }
}
