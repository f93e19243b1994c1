//! Standalone SVG document rendering.
//!
//! Produces the whole chart as one SVG string: description line, both
//! axes, the cell grid with data attributes and hover `<title>` text, and
//! the legend column to the right of the plot.

use gst_data::dataset::{DatasetError, TemperatureDataset};

use crate::axis;
use crate::cell;
use crate::layout::{ChartLayout, HEIGHT, PADDING_H, PADDING_W, WIDTH};
use crate::legend;
use crate::tooltip;

/// Length of an axis tick mark in pixels.
const TICK_SIZE: f64 = 6.0;

/// Render the full heat map document for `dataset`.
///
/// Fails with the underlying validation error for datasets the layout
/// rejects (empty, single-year, month out of range); never panics.
pub fn render_document(dataset: &TemperatureDataset) -> Result<String, DatasetError> {
    let layout = ChartLayout::for_dataset(dataset)?;
    let cells = cell::cells(dataset, &layout);

    let doc_width = WIDTH + legend::LEGEND_WIDTH;
    let mut svg = String::with_capacity(cells.len() * 200 + 4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{doc_width}" height="{HEIGHT}" font-family="sans-serif">"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text id="description" x="{}" y="24" text-anchor="middle" font-size="14">{}</text>"#,
        WIDTH / 2.0,
        dataset.describe()
    ));
    svg.push('\n');

    render_x_axis(&mut svg, &layout);
    render_y_axis(&mut svg, &layout);
    render_cells(&mut svg, dataset, &cells);
    render_legend(&mut svg);

    svg.push_str("</svg>\n");
    Ok(svg)
}

fn render_x_axis(svg: &mut String, layout: &ChartLayout) {
    let axis_y = HEIGHT - PADDING_H;
    svg.push_str(r#"<g id="x-axis" font-size="10">"#);
    svg.push('\n');
    svg.push_str(&format!(
        r#"<line x1="{PADDING_W}" y1="{axis_y}" x2="{}" y2="{axis_y}" stroke="black"/>"#,
        WIDTH - PADDING_W
    ));
    svg.push('\n');
    for tick in axis::year_ticks(layout) {
        svg.push_str(&format!(
            r#"<line x1="{x}" y1="{axis_y}" x2="{x}" y2="{}" stroke="black"/>"#,
            axis_y + TICK_SIZE,
            x = tick.position,
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle">{}</text>"#,
            tick.position,
            axis_y + 20.0,
            tick.label
        ));
        svg.push('\n');
    }
    svg.push_str("</g>\n");
}

fn render_y_axis(svg: &mut String, layout: &ChartLayout) {
    svg.push_str(r#"<g id="y-axis" font-size="10">"#);
    svg.push('\n');
    svg.push_str(&format!(
        r#"<line x1="{PADDING_W}" y1="{PADDING_H}" x2="{PADDING_W}" y2="{}" stroke="black"/>"#,
        HEIGHT - PADDING_H
    ));
    svg.push('\n');
    for tick in axis::month_ticks(layout) {
        svg.push_str(&format!(
            r#"<line x1="{}" y1="{y}" x2="{PADDING_W}" y2="{y}" stroke="black"/>"#,
            PADDING_W - TICK_SIZE,
            y = tick.position,
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="end">{}</text>"#,
            PADDING_W - 10.0,
            tick.position + 4.0,
            tick.label
        ));
        svg.push('\n');
    }
    svg.push_str("</g>\n");
}

fn render_cells(svg: &mut String, dataset: &TemperatureDataset, cells: &[cell::Cell]) {
    svg.push_str(r#"<g id="cells">"#);
    svg.push('\n');
    for (cell, reading) in cells.iter().zip(&dataset.monthly_variance) {
        svg.push_str(&format!(
            r#"<rect class="cell" x="{}" y="{}" width="{}" height="{}" fill="{}" data-year="{}" data-month="{}" data-temp="{}"><title>{}</title></rect>"#,
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            cell.color,
            cell.year,
            cell.month_index(),
            cell.temperature,
            tooltip::tooltip_text(dataset.base_temperature, reading),
        ));
        svg.push('\n');
    }
    svg.push_str("</g>\n");
}

fn render_legend(svg: &mut String) {
    svg.push_str(&format!(r#"<g id="legend" transform="translate({WIDTH},0)">"#));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="0" y="{}" text-anchor="start">{}</text>"#,
        legend::TITLE_Y,
        legend::TITLE
    ));
    svg.push('\n');
    for entry in legend::entries() {
        svg.push_str(&format!(
            r#"<rect width="{size}" height="{size}" x="{}" y="{}" fill="{}"/>"#,
            entry.swatch_x,
            entry.swatch_y,
            entry.color,
            size = legend::SWATCH_SIZE,
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="start" font-size="12">{}</text>"#,
            entry.label_x, entry.label_y, entry.label
        ));
        svg.push('\n');
    }
    svg.push_str("</g>\n");
}

#[cfg(test)]
mod test {
    use gst_data::dataset::{DatasetError, TemperatureDataset, VarianceReading};

    use super::render_document;

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
    fn renders_one_rect_per_reading() {
        let svg = render_document(&sample()).unwrap();
        assert_eq!(svg.matches(r#"class="cell""#).count(), 3);
    }

    #[test]
    fn cells_carry_the_dom_contract_attributes() {
        let svg = render_document(&sample()).unwrap();
        assert!(svg.contains(r#"data-year="1900""#));
        assert!(svg.contains(r#"data-month="0""#));
        assert!(svg.contains(r#"data-month="11""#));
        assert!(svg.contains("<title>January 1900: 7.16°C</title>"));
    }

    #[test]
    fn both_axes_and_description_are_present() {
        let svg = render_document(&sample()).unwrap();
        assert!(svg.contains(r#"id="x-axis""#));
        assert!(svg.contains(r#"id="y-axis""#));
        assert!(svg.contains("January</text>"));
        assert!(svg.contains("1753 - 2015: base temperature 8.66°C"));
    }

    #[test]
    fn legend_has_eight_swatches_regardless_of_dataset() {
        let svg = render_document(&sample()).unwrap();
        assert!(svg.contains(">Temperature</text>"));
        assert_eq!(svg.matches(r#"<rect width="20" height="20""#).count(), 8);
        assert!(svg.contains(">over 12°C</text>"));
        assert!(svg.contains(">below 4°C</text>"));
    }

    #[test]
    fn empty_dataset_renders_an_error_not_a_panic() {
        let empty = TemperatureDataset {
            base_temperature: 8.66,
            monthly_variance: Vec::new(),
        };
        assert!(matches!(render_document(&empty), Err(DatasetError::Empty)));
    }
}
