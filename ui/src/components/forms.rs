//! Validated forms and the prediction form.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::config::DashboardConfig;
use crate::core::format::format_currency;
use crate::core::forms::{FormGuard, PredictionSubmit, SubmitButtonState, SubmitDecision};

pub const PREDICTION_FORM_ID: &str = "prediction-form";
pub const PREDICT_LABEL: &str = "Predict Churn";

pub const CONTRACT_TYPES: [&str; 3] = ["Month-to-month", "One year", "Two year"];

/// `(value, label)` pairs.
pub const PAYMENT_METHODS: [(&str, &str); 7] = [
    ("Electronic check", "Electronic check"),
    ("Mailed check", "Mailed check"),
    ("Bank transfer (automatic)", "Bank transfer (automatic)"),
    ("Credit card (automatic)", "Credit card (automatic)"),
    ("UPI", "UPI (Unified Payments Interface)"),
    ("Net Banking", "Net Banking"),
    ("Digital Wallet", "Digital Wallet (Paytm/PhonePe/GPay)"),
];

/// A `form.needs-validation` gated on the browser's constraint validation.
///
/// Invalid submissions are stopped before they leave the form. Valid ones
/// reach `onvalid` and then continue to `action` as a regular submission.
#[component]
pub fn ValidatedForm(
    #[props(into)] id: Option<String>,
    #[props(into)] action: Option<String>,
    #[props(into, default = "post".to_string())] method: String,
    #[props(into)] enctype: Option<String>,
    onvalid: Option<EventHandler<FormEvent>>,
    children: Element,
) -> Element {
    let mut guard = use_signal(FormGuard::default);
    let mut mounted = use_signal(|| None::<Rc<MountedData>>);

    rsx! {
        form {
            id,
            class: guard().class_name(),
            action,
            method,
            enctype,
            novalidate: true,
            onmounted: move |evt| mounted.set(Some(evt.data())),
            onsubmit: move |evt| {
                let valid = mounted.peek().as_deref().map(form_is_valid).unwrap_or(true);
                if guard.write().on_submit(valid) == SubmitDecision::Block {
                    evt.prevent_default();
                    evt.stop_propagation();
                    return;
                }
                if let Some(handler) = onvalid {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// `HTMLFormElement.checkValidity()`. Native renderers have no constraint API
/// and accept every submission.
fn form_is_valid(mounted: &MountedData) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        mounted
            .downcast::<web_sys::Element>()
            .and_then(|el| el.dyn_ref::<web_sys::HtmlFormElement>())
            .map(|form| form.check_validity())
            .unwrap_or(true)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mounted;
        true
    }
}

#[component]
pub fn PredictionSubmitButton(state: SubmitButtonState) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: "btn btn-primary btn-lg w-100",
            disabled: state.disabled(),
            if state.is_busy() {
                span { class: "spinner-border spinner-border-sm me-2", aria_hidden: "true" }
            } else {
                i { class: "fas fa-magic me-2", aria_hidden: "true" }
            }
            "{state.label()}"
        }
    }
}

/// The single-customer prediction form.
#[component]
pub fn PredictionForm() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();
    let button = use_signal(|| SubmitButtonState::idle(PREDICT_LABEL));
    let submit = use_hook(move || {
        Rc::new(PredictionSubmit::new(
            PREDICT_LABEL,
            config.submit_revert_ms,
            move |state| {
                let mut button = button;
                button.set(state.clone());
            },
        ))
    });
    let mut monthly = use_signal(|| None::<f64>);

    let contract_options = CONTRACT_TYPES.iter().map(|value| {
        rsx! { option { key: "{value}", value: "{value}", "{value}" } }
    });
    let payment_options = PAYMENT_METHODS.iter().map(|(value, label)| {
        rsx! { option { key: "{value}", value: "{value}", "{label}" } }
    });
    let monthly_preview = monthly().map(format_currency);

    rsx! {
        ValidatedForm {
            id: PREDICTION_FORM_ID,
            action: "/predict",
            onvalid: move |_| submit.submit(),
            div { class: "row g-3",
                div { class: "col-md-6",
                    label { class: "form-label", r#for: "customer_name", "Customer Name" }
                    input {
                        id: "customer_name",
                        name: "customer_name",
                        class: "form-control",
                        r#type: "text",
                        required: true,
                        minlength: "2",
                        maxlength: "100",
                    }
                    div { class: "invalid-feedback", "Enter a name between 2 and 100 characters." }
                }
                div { class: "col-md-6",
                    label { class: "form-label", r#for: "tenure", "Tenure (Months)" }
                    input {
                        id: "tenure",
                        name: "tenure",
                        class: "form-control",
                        r#type: "number",
                        required: true,
                        min: "0",
                        max: "100",
                        step: "any",
                    }
                    div { class: "invalid-feedback", "Tenure must be between 0 and 100 months." }
                }
                div { class: "col-md-6",
                    label { class: "form-label", r#for: "monthly_charges", "Monthly Charges" }
                    input {
                        id: "monthly_charges",
                        name: "monthly_charges",
                        class: "form-control",
                        r#type: "number",
                        required: true,
                        min: "0",
                        max: "50000",
                        step: "0.01",
                        oninput: move |evt| monthly.set(evt.value().parse::<f64>().ok()),
                    }
                    if let Some(preview) = monthly_preview {
                        div { class: "form-text", "{preview} per month" }
                    }
                    div { class: "invalid-feedback", "Monthly charges must be between 0 and 50,000." }
                }
                div { class: "col-md-6",
                    label { class: "form-label", r#for: "total_charges", "Total Charges" }
                    input {
                        id: "total_charges",
                        name: "total_charges",
                        class: "form-control",
                        r#type: "number",
                        required: true,
                        min: "0",
                        max: "500000",
                        step: "0.01",
                    }
                    div { class: "invalid-feedback", "Total charges must be between 0 and 500,000." }
                }
                div { class: "col-md-6",
                    label { class: "form-label", r#for: "contract_type", "Contract Type" }
                    select {
                        id: "contract_type",
                        name: "contract_type",
                        class: "form-select",
                        required: true,
                        {contract_options}
                    }
                }
                div { class: "col-md-6",
                    label { class: "form-label", r#for: "payment_method", "Payment Method" }
                    select {
                        id: "payment_method",
                        name: "payment_method",
                        class: "form-select",
                        required: true,
                        {payment_options}
                    }
                }
                div { class: "col-12",
                    PredictionSubmitButton { state: button() }
                }
            }
        }
    }
}
