//! Tooltip text for hovered cells.

use gst_data::dataset::VarianceReading;
use gst_data::month::month_name;

/// Tooltip markup for a hovered cell, e.g. `January 1900<br />7.16°C`.
pub fn tooltip_html(base_temperature: f64, reading: &VarianceReading) -> String {
    format!(
        "{} {}<br />{:.2}°C",
        month_name(reading.month).unwrap_or_default(),
        reading.year,
        reading.temperature(base_temperature)
    )
}

/// Plain-text form used for SVG `<title>` hover text,
/// e.g. `January 1900: 7.16°C`.
pub fn tooltip_text(base_temperature: f64, reading: &VarianceReading) -> String {
    format!(
        "{} {}: {:.2}°C",
        month_name(reading.month).unwrap_or_default(),
        reading.year,
        reading.temperature(base_temperature)
    )
}

#[cfg(test)]
mod test {
    use gst_data::dataset::VarianceReading;

    use super::{tooltip_html, tooltip_text};

    #[test]
    fn html_matches_the_documented_contract() {
        let reading = VarianceReading {
            year: 1900,
            month: 1,
            variance: -1.5,
        };
        assert_eq!(tooltip_html(8.66, &reading), "January 1900<br />7.16°C");
    }

    #[test]
    fn temperature_is_rounded_to_two_decimals() {
        let reading = VarianceReading {
            year: 2015,
            month: 12,
            variance: 0.985,
        };
        assert_eq!(tooltip_html(8.66, &reading), "December 2015<br />9.64°C");
    }

    #[test]
    fn text_form_drops_the_markup() {
        let reading = VarianceReading {
            year: 1900,
            month: 1,
            variance: -1.5,
        };
        assert_eq!(tooltip_text(8.66, &reading), "January 1900: 7.16°C");
    }
}
