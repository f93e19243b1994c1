//! Core types for the monthly global land-surface temperature dataset.
//!
//! This crate owns the wire model (`dataset`), the fixed temperature color
//! table (`bucket`), month-name formatting (`month`), and the native HTTP
//! client (`client`, behind the `api` feature).

pub mod bucket;
pub mod dataset;
pub mod month;

#[cfg(feature = "api")]
pub mod client;
