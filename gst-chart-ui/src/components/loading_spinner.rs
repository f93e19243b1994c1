//! Loading indicator component.

use dioxus::prelude::*;

/// Placeholder shown while the dataset fetch is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            id: "loading",
            style: "display: flex; justify-content: center; align-items: center; min-height: 200px; color: #666; font-size: 14px;",
            "Loading temperature data…"
        }
    }
}
