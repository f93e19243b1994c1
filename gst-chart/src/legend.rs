//! The fixed 8-entry legend.
//!
//! Entirely dataset-independent: the entries mirror the bucket table,
//! hottest first, stacked at a fixed pitch below the title.

use gst_data::bucket::BUCKETS;

/// Legend canvas width in pixels.
pub const LEGEND_WIDTH: f64 = 150.0;
/// Side length of each color swatch.
pub const SWATCH_SIZE: f64 = 20.0;
/// Vertical distance between consecutive swatch tops.
pub const ROW_PITCH: f64 = 25.0;
/// Title drawn above the swatches.
pub const TITLE: &str = "Temperature";
/// Baseline of the title text.
pub const TITLE_Y: f64 = 90.0;

const FIRST_SWATCH_Y: f64 = 100.0;
const LABEL_X: f64 = 25.0;
const LABEL_BASELINE_OFFSET: f64 = 15.0;

/// One swatch/label pair with precomputed coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub color: &'static str,
    pub label: &'static str,
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub label_x: f64,
    pub label_y: f64,
}

/// The eight legend entries in bucket order (hottest first).
pub fn entries() -> Vec<LegendEntry> {
    BUCKETS
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let swatch_y = FIRST_SWATCH_Y + i as f64 * ROW_PITCH;
            LegendEntry {
                color: bucket.color,
                label: bucket.label,
                swatch_x: 0.0,
                swatch_y,
                label_x: LABEL_X,
                label_y: swatch_y + LABEL_BASELINE_OFFSET,
            }
        })
        .collect()
}
