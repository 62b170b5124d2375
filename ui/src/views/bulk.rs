use dioxus::prelude::*;

use crate::components::alerts::show_alert;
use crate::components::forms::ValidatedForm;
use crate::core::alerts::Severity;

#[component]
pub fn BulkPredict() -> Element {
    rsx! {
        section { class: "page page-bulk",
            h1 { class: "h3", "Bulk Predict" }
            p { "Upload a CSV with one customer per row to score them all at once." }
            ValidatedForm {
                id: "bulk-form",
                action: "/bulk-predict",
                enctype: "multipart/form-data",
                onvalid: move |_| {
                    show_alert("Uploading customers for scoring...", Severity::Info);
                },
                div { class: "mb-3",
                    label { class: "form-label", r#for: "csv_file", "CSV file" }
                    input {
                        id: "csv_file",
                        name: "file",
                        class: "form-control",
                        r#type: "file",
                        accept: ".csv",
                        required: true,
                    }
                    div { class: "invalid-feedback", "Choose a CSV file to upload." }
                }
                button { r#type: "submit", class: "btn btn-primary",
                    i { class: "fas fa-file-upload me-2", aria_hidden: "true" }
                    "Upload and Predict"
                }
            }
        }
    }
}
