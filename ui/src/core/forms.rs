//! Form submission state: constraint-validation gating and the prediction
//! form's busy button.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::tasks::TaskScope;
use super::timing::sleep_ms;

pub const VALIDATION_MARKER_CLASS: &str = "needs-validation";
pub const VALIDATED_CLASS: &str = "was-validated";

pub const SUBMIT_REVERT_MS: u64 = 3_000;
pub const BUSY_LABEL: &str = "Predicting...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Block,
}

/// Per-form validation state. Once a submit was attempted the form carries
/// `was-validated` so field styling reflects pass/fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormGuard {
    validated: bool,
}

impl FormGuard {
    pub fn on_submit(&mut self, valid: bool) -> SubmitDecision {
        self.validated = true;
        if valid {
            SubmitDecision::Proceed
        } else {
            SubmitDecision::Block
        }
    }

    pub fn is_validated(&self) -> bool {
        self.validated
    }

    pub fn class_name(&self) -> String {
        if self.is_validated() {
            format!("{VALIDATION_MARKER_CLASS} {VALIDATED_CLASS}")
        } else {
            VALIDATION_MARKER_CLASS.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonState {
    label: String,
    disabled: bool,
    original: Option<String>,
}

impl SubmitButtonState {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            original: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_busy(&self) -> bool {
        self.original.is_some()
    }

    /// Swap in the busy label and disable the button. Returns `false` when the
    /// button is already busy (the captured label is kept).
    pub fn engage(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        let original = std::mem::replace(&mut self.label, BUSY_LABEL.to_string());
        self.original = Some(original);
        self.disabled = true;
        true
    }

    pub fn revert(&mut self) {
        if let Some(original) = self.original.take() {
            self.label = original;
        }
        self.disabled = false;
    }
}

type Listener = Rc<dyn Fn(&SubmitButtonState)>;

/// Optimistic feedback for the prediction form: busy immediately, restored
/// after `revert_ms` whether or not the request settled.
pub struct PredictionSubmit {
    state: Rc<RefCell<SubmitButtonState>>,
    listener: Listener,
    revert_ms: u64,
    tasks: TaskScope,
}

impl PredictionSubmit {
    pub fn new(
        label: impl Into<String>,
        revert_ms: u64,
        listener: impl Fn(&SubmitButtonState) + 'static,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(SubmitButtonState::idle(label))),
            listener: Rc::new(listener),
            revert_ms,
            tasks: TaskScope::new(),
        }
    }

    pub fn state(&self) -> SubmitButtonState {
        self.state.borrow().clone()
    }

    pub fn submit(&self) {
        if !self.state.borrow_mut().engage() {
            return;
        }
        (self.listener)(&self.state.borrow());

        let state = self.state.clone();
        let listener = self.listener.clone();
        let revert_ms = self.revert_ms;
        self.tasks.spawn(async move {
            sleep_ms(revert_ms).await;
            state.borrow_mut().revert();
            listener(&state.borrow());
        });
    }
}

impl fmt::Debug for PredictionSubmit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictionSubmit")
            .field("state", &self.state.borrow())
            .field("revert_ms", &self.revert_ms)
            .finish()
    }
}
