//! Reusable Dioxus RSX components for the heat map app.

mod chart_header;
mod error_display;
mod heat_map;
mod legend;
mod loading_spinner;
mod tooltip;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use heat_map::HeatMap;
pub use legend::Legend;
pub use loading_spinner::LoadingSpinner;
pub use tooltip::Tooltip;
