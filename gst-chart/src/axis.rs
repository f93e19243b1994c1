//! Axis tick derivation.

use gst_data::dataset::MONTHS_PER_YEAR;
use gst_data::month::month_name;

use crate::layout::ChartLayout;

/// Target tick count for the year axis; the scale snaps to a round step.
pub const YEAR_TICK_COUNT: usize = 10;

/// One axis tick: a pixel position along the axis and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Bottom-axis ticks: round years across the dataset span.
pub fn year_ticks(layout: &ChartLayout) -> Vec<Tick> {
    layout
        .x_scale()
        .ticks(YEAR_TICK_COUNT)
        .into_iter()
        .map(|year| Tick {
            position: layout.x_scale().scale(year),
            label: format!("{}", year.round() as i64),
        })
        .collect()
}

/// Left-axis ticks: one per month, labeled with the full month name and
/// centered on the month's cell row.
pub fn month_ticks(layout: &ChartLayout) -> Vec<Tick> {
    (1..=MONTHS_PER_YEAR)
        .map(|month| Tick {
            position: layout.y(month) + layout.cell_height / 2.0,
            label: month_name(month).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use gst_data::dataset::{TemperatureDataset, VarianceReading};

    use super::{month_ticks, year_ticks};
    use crate::layout::ChartLayout;

    fn layout() -> ChartLayout {
        let dataset = TemperatureDataset {
            base_temperature: 8.66,
            monthly_variance: vec![
                VarianceReading {
                    year: 1753,
                    month: 1,
                    variance: 0.0,
                },
                VarianceReading {
                    year: 2015,
                    month: 12,
                    variance: 0.0,
                },
            ],
        };
        ChartLayout::for_dataset(&dataset).unwrap()
    }

    #[test]
    fn year_ticks_are_round_integers_inside_the_span() {
        let ticks = year_ticks(&layout());
        assert!(!ticks.is_empty());
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("1760"));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("2000"));
    }

    #[test]
    fn twelve_month_ticks_named_and_centered() {
        let layout = layout();
        let ticks = month_ticks(&layout);
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0].label, "January");
        assert_eq!(ticks[11].label, "December");
        assert_eq!(ticks[0].position, layout.y(1) + layout.cell_height / 2.0);
    }
}
