//! Monthly Global Land-Surface Temperature heat map.
//!
//! Data flow:
//! 1. On mount: fetch the dataset JSON from its public location.
//! 2. Parse and validate it into a `TemperatureDataset`.
//! 3. Render the year × month cell grid, axes, legend, and tooltip.
//!
//! There is no second fetch; the whole view is rebuilt from the one
//! successful load, and any failure surfaces in the error box.

use dioxus::prelude::*;
use gst_chart_ui::components::{
    ChartHeader, ErrorDisplay, HeatMap, Legend, LoadingSpinner, Tooltip,
};
use gst_chart_ui::fetch;
use gst_chart_ui::state::AppState;
use gst_data::dataset::DATASET_URL;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("global-temp-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // One fetch on mount; loading/error/dataset signals drive the view.
    use_future(move || async move {
        match fetch::fetch_dataset(DATASET_URL).await {
            Ok(dataset) => state.dataset.set(Some(dataset)),
            Err(message) => {
                log::warn!("dataset fetch failed: {message}");
                state.error_msg.set(Some(message));
            }
        }
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif; position: relative;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                if let Some(dataset) = state.dataset.read().as_ref() {
                    ChartHeader {
                        title: "Monthly Global Land-Surface Temperature".to_string(),
                        description: dataset.describe(),
                    }

                    div {
                        style: "display: flex; align-items: flex-start;",
                        HeatMap { dataset: dataset.clone() }
                        Legend {}
                    }

                    Tooltip {}
                }
            }
        }
    }
}
