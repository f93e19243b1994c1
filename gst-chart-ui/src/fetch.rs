//! Browser-side dataset fetch.
//!
//! One GET through the window fetch API; the body is read as text and fed
//! through the same `TemperatureDataset::from_json` path the native client
//! uses. Failures come back as display strings for the error signal — no
//! unobserved rejections.

use gst_data::dataset::TemperatureDataset;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Fetch and validate the dataset from `url`.
pub async fn fetch_dataset(url: &str) -> Result<TemperatureDataset, String> {
    log::info!("Fetching temperature dataset from {url}");

    let window = web_sys::window().ok_or_else(|| "window object not found".to_string())?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| format!("failed to build request for {url}"))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| format!("network request for {url} failed"))?;

    let response: Response = response_value
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response value".to_string())?;

    if !response.ok() {
        return Err(format!(
            "dataset request returned status {}",
            response.status()
        ));
    }

    let body_promise = response
        .text()
        .map_err(|_| "failed to read response body".to_string())?;
    let body_value = JsFuture::from(body_promise)
        .await
        .map_err(|_| "failed to read response body".to_string())?;
    let body = body_value
        .as_string()
        .ok_or_else(|| "response body was not text".to_string())?;

    TemperatureDataset::from_json(&body).map_err(|e| e.to_string())
}
