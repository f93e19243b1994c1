//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gst_data::dataset::TemperatureDataset;

/// The shared tooltip: a single UI element whose content is whatever the
/// most recent hover wrote into it. Pointer events are serialized by the
/// browser, so last-write-wins needs no further coordination.
#[derive(Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    /// Left edge in page coordinates.
    pub x: f64,
    /// Top edge in page coordinates.
    pub y: f64,
    /// Year of the hovered cell, mirrored as the tooltip's `data-year`.
    pub year: i32,
    /// Markup shown inside the tooltip, from `gst_chart::tooltip`.
    pub html: String,
}

/// Shared application state for the heat map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the dataset fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if the fetch or validation failed
    pub error_msg: Signal<Option<String>>,
    /// The fetched dataset (None until loaded)
    pub dataset: Signal<Option<TemperatureDataset>>,
    /// The shared hover tooltip
    pub tooltip: Signal<TooltipState>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dataset: Signal::new(None),
            tooltip: Signal::new(TooltipState::default()),
        }
    }
}
