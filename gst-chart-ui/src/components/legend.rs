//! The fixed legend column.

use dioxus::prelude::*;
use gst_chart::layout::HEIGHT;
use gst_chart::legend;

/// Static 8-swatch temperature legend; independent of the dataset.
#[component]
pub fn Legend() -> Element {
    let width = legend::LEGEND_WIDTH;
    let swatch_size = legend::SWATCH_SIZE;
    let title = legend::TITLE;
    let title_y = legend::TITLE_Y;

    rsx! {
        svg {
            id: "legend",
            width: "{width}",
            height: "{HEIGHT}",

            text {
                x: "0",
                y: "{title_y}",
                text_anchor: "start",
                "{title}"
            }
            for entry in legend::entries() {
                rect {
                    key: "{entry.label}",
                    width: "{swatch_size}",
                    height: "{swatch_size}",
                    x: "{entry.swatch_x}",
                    y: "{entry.swatch_y}",
                    fill: "{entry.color}",
                }
                text {
                    x: "{entry.label_x}",
                    y: "{entry.label_y}",
                    text_anchor: "start",
                    font_size: "12",
                    "{entry.label}"
                }
            }
        }
    }
}
