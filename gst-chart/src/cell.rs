//! Per-reading cell derivation.

use gst_data::bucket;
use gst_data::dataset::TemperatureDataset;

use crate::layout::ChartLayout;

/// One rectangle of the heat map grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Absolute temperature, `base + variance`.
    pub temperature: f64,
    pub color: &'static str,
}

impl Cell {
    /// 0-indexed month, the value carried by the `data-month` attribute.
    pub fn month_index(&self) -> u32 {
        self.month.saturating_sub(1)
    }
}

/// Derive one cell per reading, in received order.
pub fn cells(dataset: &TemperatureDataset, layout: &ChartLayout) -> Vec<Cell> {
    dataset
        .monthly_variance
        .iter()
        .map(|reading| Cell {
            year: reading.year,
            month: reading.month,
            x: layout.x(reading.year),
            y: layout.y(reading.month),
            width: layout.cell_width,
            height: layout.cell_height,
            temperature: reading.temperature(dataset.base_temperature),
            color: bucket::cell_color(dataset.base_temperature, reading.variance),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use gst_data::dataset::{TemperatureDataset, VarianceReading};

    use super::cells;
    use crate::layout::ChartLayout;

    fn sample() -> TemperatureDataset {
        TemperatureDataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                VarianceReading {
                    year: 1753,
                    month: 1,
                    variance: -1.366,
                },
                VarianceReading {
                    year: 1900,
                    month: 1,
                    variance: -1.5,
                },
                VarianceReading {
                    year: 2015,
                    month: 12,
                    variance: 0.985,
                },
            ],
        }
    }

    #[test]
    fn one_cell_per_reading_in_received_order() {
        let dataset = sample();
        let layout = ChartLayout::for_dataset(&dataset).unwrap();
        let cells = cells(&dataset, &layout);
        assert_eq!(cells.len(), dataset.monthly_variance.len());
        assert_eq!(cells[0].year, 1753);
        assert_eq!(cells[2].year, 2015);
    }

    #[test]
    fn month_index_is_zero_based() {
        let dataset = sample();
        let layout = ChartLayout::for_dataset(&dataset).unwrap();
        for (cell, reading) in cells(&dataset, &layout)
            .iter()
            .zip(&dataset.monthly_variance)
        {
            assert_eq!(cell.month_index(), reading.month - 1);
        }
    }

    #[test]
    fn temperature_and_color_come_from_the_bucket_table() {
        let dataset = sample();
        let layout = ChartLayout::for_dataset(&dataset).unwrap();
        let cells = cells(&dataset, &layout);
        // 8.66 - 1.5 = 7.16 -> 7-8°C bucket
        assert!((cells[1].temperature - 7.16).abs() < 1e-9);
        assert_eq!(cells[1].color, "#ffff99");
    }

    #[test]
    fn cells_carry_the_layout_geometry() {
        let dataset = sample();
        let layout = ChartLayout::for_dataset(&dataset).unwrap();
        let cells = cells(&dataset, &layout);
        assert_eq!(cells[0].x, layout.x(1753));
        assert_eq!(cells[0].y, layout.y(1));
        assert_eq!(cells[0].width, layout.cell_width);
        assert_eq!(cells[0].height, layout.cell_height);
    }
}
