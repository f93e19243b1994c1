//! The interactive heat map SVG.
//!
//! Renders the axes and one rect per reading from the shared chart
//! geometry, and wires hover/unhover on every cell to the shared tooltip
//! signal.

use dioxus::prelude::*;
use gst_chart::layout::{HEIGHT, PADDING_H, PADDING_W, WIDTH};
use gst_chart::tooltip::tooltip_html;
use gst_chart::{axis, cells, ChartLayout};
use gst_data::dataset::TemperatureDataset;

use crate::components::ErrorDisplay;
use crate::state::{AppState, TooltipState};

/// Vertical gap between the pointer and the tooltip top edge.
const TOOLTIP_OFFSET_Y: f64 = 60.0;

#[derive(Props, Clone, PartialEq)]
pub struct HeatMapProps {
    pub dataset: TemperatureDataset,
}

/// Year × month grid of temperature cells with axes.
#[component]
pub fn HeatMap(props: HeatMapProps) -> Element {
    let mut state = use_context::<AppState>();

    let layout = match ChartLayout::for_dataset(&props.dataset) {
        Ok(layout) => layout,
        Err(err) => {
            return rsx! {
                ErrorDisplay { message: err.to_string() }
            }
        }
    };

    let base_temperature = props.dataset.base_temperature;

    // Precompute the axis geometry so the RSX below only interpolates
    // ready-made values.
    let x_axis_y = HEIGHT - PADDING_H;
    let x_axis_end = WIDTH - PADDING_W;
    let x_tick_end_y = x_axis_y + 6.0;
    let x_label_y = x_axis_y + 20.0;
    let y_tick_start_x = PADDING_W - 6.0;
    let y_label_x = PADDING_W - 10.0;

    let year_ticks = axis::year_ticks(&layout);
    let month_ticks: Vec<_> = axis::month_ticks(&layout)
        .into_iter()
        .map(|tick| {
            let label_y = tick.position + 4.0;
            (tick, label_y)
        })
        .collect();
    let cell_views: Vec<_> = cells(&props.dataset, &layout)
        .into_iter()
        .zip(props.dataset.monthly_variance.iter().copied())
        .map(|(cell, reading)| (cell, reading, cell.month_index()))
        .collect();

    rsx! {
        svg {
            id: "heat-map",
            width: "{WIDTH}",
            height: "{HEIGHT}",

            g {
                id: "x-axis",
                font_size: "10",
                line {
                    x1: "{PADDING_W}",
                    y1: "{x_axis_y}",
                    x2: "{x_axis_end}",
                    y2: "{x_axis_y}",
                    stroke: "black",
                }
                for tick in year_ticks {
                    line {
                        x1: "{tick.position}",
                        y1: "{x_axis_y}",
                        x2: "{tick.position}",
                        y2: "{x_tick_end_y}",
                        stroke: "black",
                    }
                    text {
                        x: "{tick.position}",
                        y: "{x_label_y}",
                        text_anchor: "middle",
                        "{tick.label}"
                    }
                }
            }

            g {
                id: "y-axis",
                font_size: "10",
                line {
                    x1: "{PADDING_W}",
                    y1: "{PADDING_H}",
                    x2: "{PADDING_W}",
                    y2: "{x_axis_y}",
                    stroke: "black",
                }
                for (tick, label_y) in month_ticks {
                    line {
                        x1: "{y_tick_start_x}",
                        y1: "{tick.position}",
                        x2: "{PADDING_W}",
                        y2: "{tick.position}",
                        stroke: "black",
                    }
                    text {
                        x: "{y_label_x}",
                        y: "{label_y}",
                        text_anchor: "end",
                        "{tick.label}"
                    }
                }
            }

            for (cell, reading, month_index) in cell_views {
                rect {
                    key: "{cell.year}-{cell.month}",
                    class: "cell",
                    x: "{cell.x}",
                    y: "{cell.y}",
                    width: "{cell.width}",
                    height: "{cell.height}",
                    fill: "{cell.color}",
                    "data-year": "{cell.year}",
                    "data-month": "{month_index}",
                    "data-temp": "{cell.temperature}",
                    onmouseover: move |evt: MouseEvent| {
                        let point = evt.page_coordinates();
                        state.tooltip.set(TooltipState {
                            visible: true,
                            x: point.x,
                            y: point.y - TOOLTIP_OFFSET_Y,
                            year: cell.year,
                            html: tooltip_html(base_temperature, &reading),
                        });
                    },
                    onmouseout: move |_| {
                        state.tooltip.with_mut(|tip| tip.visible = false);
                    },
                }
            }
        }
    }
}
