//! Chart geometry and rendering for the temperature heat map.
//!
//! Everything in this crate is pure computation over a
//! `TemperatureDataset`: layout constants, the year scale, axis ticks,
//! the per-reading cell grid, tooltip text, the fixed legend, and a
//! standalone SVG document renderer. No I/O happens here; the Dioxus app
//! and the CLI both draw from these modules.

pub mod axis;
pub mod cell;
pub mod layout;
pub mod legend;
pub mod scale;
pub mod svg;
pub mod tooltip;

pub use cell::{cells, Cell};
pub use layout::ChartLayout;
