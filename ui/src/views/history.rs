use dioxus::prelude::*;

use crate::components::widgets::ScrollLink;

#[component]
pub fn History() -> Element {
    rsx! {
        section { class: "page page-history",
            h1 { class: "h3", "Prediction History" }
            p {
                "Past predictions are listed newest first. "
                ScrollLink { target: "history-table", "Skip to the table" }
            }
            div { id: "history-table", class: "card",
                div { class: "card-body",
                    table { class: "table table-hover mb-0",
                        thead {
                            tr {
                                th { "Customer" }
                                th { "Monthly Charges" }
                                th { "Prediction" }
                                th { "Date" }
                            }
                        }
                        tbody {
                            tr {
                                td { colspan: "4", class: "text-center text-muted",
                                    "No predictions yet."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
