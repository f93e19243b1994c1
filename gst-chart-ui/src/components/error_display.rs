//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown when the dataset fetch or validation fails; the page renders no
/// chart in that case, only this box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            id: "load-error",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF3E0; color: #B34700; border-radius: 4px; border: 1px solid #FFB74D;",
            strong { "Could not show the temperature map: " }
            "{props.message}"
        }
    }
}
