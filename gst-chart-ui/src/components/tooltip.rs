//! The shared hover tooltip.

use dioxus::prelude::*;

use crate::state::AppState;

/// Absolute-positioned tooltip following the pointer over the heat map.
/// Content and position come from the shared tooltip signal; whichever
/// hover wrote last wins.
#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<AppState>();
    let tip = (state.tooltip)();
    let visibility = if tip.visible { "visible" } else { "hidden" };

    rsx! {
        div {
            id: "tooltip",
            "data-year": "{tip.year}",
            style: "position: absolute; left: {tip.x}px; top: {tip.y}px; visibility: {visibility}; background: #333; color: #fff; padding: 6px 10px; border-radius: 4px; font-size: 12px; text-align: center; pointer-events: none;",
            dangerous_inner_html: "{tip.html}",
        }
    }
}
