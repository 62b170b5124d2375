use dioxus::prelude::*;

use crate::components::forms::PredictionForm;
use crate::components::widgets::use_tooltips;

#[component]
pub fn Predict() -> Element {
    use_tooltips();

    rsx! {
        section { class: "page page-predict",
            div { class: "card",
                div { class: "card-header",
                    h1 { class: "h4 mb-0",
                        i { class: "fas fa-magic me-2", aria_hidden: "true" }
                        "Predict Customer Churn"
                    }
                }
                div { class: "card-body",
                    p { class: "text-muted",
                        "Enter the customer's account details. All fields are required."
                    }
                    PredictionForm {}
                }
            }
        }
    }
}
