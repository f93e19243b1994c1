//! Shared Dioxus pieces for the temperature heat map app.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `fetch`: Browser-side dataset fetch via web-sys
//! - `components`: Reusable RSX components (heat map, legend, tooltip, etc.)

pub mod components;
pub mod fetch;
pub mod state;
