//! Canvas dimensions and the year/month placement math.

use gst_data::dataset::{DatasetError, TemperatureDataset, MONTHS_PER_YEAR};

use crate::scale::LinearScale;

/// Chart canvas width in pixels.
pub const WIDTH: f64 = 900.0;
/// Chart canvas height in pixels.
pub const HEIGHT: f64 = 500.0;
/// Horizontal padding reserved for the y-axis and its labels.
pub const PADDING_W: f64 = 80.0;
/// Vertical padding reserved for the x-axis and its labels.
pub const PADDING_H: f64 = 40.0;

/// Placement math for one dataset: the year scale plus the fixed cell
/// size. Construction fails on datasets whose year span would degenerate
/// the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub min_year: i32,
    pub max_year: i32,
    pub cell_width: f64,
    pub cell_height: f64,
    x_scale: LinearScale,
}

impl ChartLayout {
    pub fn for_dataset(dataset: &TemperatureDataset) -> Result<Self, DatasetError> {
        dataset.validate()?;
        let (min_year, max_year) = dataset.year_range().ok_or(DatasetError::Empty)?;
        let plot_width = WIDTH - 2.0 * PADDING_W;
        let plot_height = HEIGHT - 2.0 * PADDING_H;
        Ok(Self {
            min_year,
            max_year,
            cell_width: plot_width / f64::from(max_year - min_year),
            cell_height: plot_height / f64::from(MONTHS_PER_YEAR),
            x_scale: LinearScale::new(
                (f64::from(min_year), f64::from(max_year)),
                (PADDING_W, WIDTH - PADDING_W),
            ),
        })
    }

    /// Left edge of the cell column for `year`.
    pub fn x(&self, year: i32) -> f64 {
        self.x_scale.scale(f64::from(year))
    }

    /// Top edge of the cell row for a 1-based `month`.
    pub fn y(&self, month: u32) -> f64 {
        PADDING_H + f64::from(month.saturating_sub(1)) * self.cell_height
    }

    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }
}

#[cfg(test)]
mod test {
    use gst_data::dataset::{DatasetError, TemperatureDataset, VarianceReading};

    use super::{ChartLayout, HEIGHT, PADDING_H, PADDING_W, WIDTH};

    fn dataset(years: &[(i32, u32, f64)]) -> TemperatureDataset {
        TemperatureDataset {
            base_temperature: 8.66,
            monthly_variance: years
                .iter()
                .map(|&(year, month, variance)| VarianceReading {
                    year,
                    month,
                    variance,
                })
                .collect(),
        }
    }

    #[test]
    fn sample_boundary_years_give_the_documented_cell_size() {
        let layout =
            ChartLayout::for_dataset(&dataset(&[(1753, 1, -1.366), (2015, 12, 0.985)])).unwrap();
        assert_eq!(layout.cell_width, (WIDTH - 2.0 * PADDING_W) / 262.0);
        assert_eq!(layout.cell_height, (HEIGHT - 2.0 * PADDING_H) / 12.0);
        assert_eq!(layout.cell_height, 35.0);
    }

    #[test]
    fn year_scale_spans_the_padded_plot() {
        let layout =
            ChartLayout::for_dataset(&dataset(&[(1753, 1, 0.0), (2015, 12, 0.0)])).unwrap();
        assert_eq!(layout.x(1753), PADDING_W);
        assert_eq!(layout.x(2015), WIDTH - PADDING_W);
    }

    #[test]
    fn month_rows_stack_from_the_top_padding() {
        let layout =
            ChartLayout::for_dataset(&dataset(&[(1753, 1, 0.0), (2015, 12, 0.0)])).unwrap();
        assert_eq!(layout.y(1), PADDING_H);
        assert_eq!(layout.y(2), PADDING_H + 35.0);
        assert_eq!(layout.y(12), PADDING_H + 11.0 * 35.0);
    }

    #[test]
    fn empty_dataset_is_an_error_not_a_panic() {
        let result = ChartLayout::for_dataset(&dataset(&[]));
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn single_year_dataset_is_rejected() {
        let result = ChartLayout::for_dataset(&dataset(&[(1900, 1, 0.0), (1900, 2, 0.0)]));
        assert!(matches!(result, Err(DatasetError::SingleYear { .. })));
    }
}
