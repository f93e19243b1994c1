//! Chart header component with title and dataset description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Dataset summary line, e.g. "1753 - 2015: base temperature 8.66°C"
    #[props(default = String::new())]
    pub description: String,
}

/// Header showing the chart title and the dataset summary.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            h3 {
                id: "title",
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    id: "description",
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{props.description}"
                }
            }
        }
    }
}
