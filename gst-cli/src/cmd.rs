//! Command implementations for the GST CLI.

use std::time::Duration;

use clap::Subcommand;
use gst_data::client;
use gst_data::dataset::{TemperatureDataset, DATASET_URL};
use log::info;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the dataset and save it as pretty-printed JSON
    Query {
        /// Dataset URL
        #[arg(long, default_value = DATASET_URL)]
        url: String,

        /// Output path for the dataset JSON
        #[arg(short, long)]
        output: String,
    },

    /// Render the heat map as a standalone SVG document
    Render {
        /// Dataset URL (ignored when --input is given)
        #[arg(long, default_value = DATASET_URL)]
        url: String,

        /// Read the dataset from a local JSON file instead of fetching
        #[arg(short, long)]
        input: Option<String>,

        /// Output path for the SVG document
        #[arg(short, long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query { url, output } => run_query(&url, &output).await,
        Command::Render { url, input, output } => {
            run_render(&url, input.as_deref(), &output).await
        }
    }
}

fn http_client() -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?)
}

/// Fetch the dataset, log a summary, and write it out as JSON.
async fn run_query(url: &str, output: &str) -> anyhow::Result<()> {
    let client = http_client()?;
    let dataset = client::fetch_dataset(&client, url).await?;

    info!("{}", dataset.describe());
    if let Some((min_year, max_year)) = dataset.year_range() {
        info!(
            "{} readings across {} - {}",
            dataset.monthly_variance.len(),
            min_year,
            max_year
        );
    }

    std::fs::write(output, serde_json::to_string_pretty(&dataset)?)?;
    info!("Query complete. Output: {output}");
    Ok(())
}

/// Obtain the dataset (remote or local) and write the rendered SVG.
async fn run_render(url: &str, input: Option<&str>, output: &str) -> anyhow::Result<()> {
    let dataset = match input {
        Some(path) => {
            info!("Reading dataset from {path}");
            let body = std::fs::read_to_string(path)?;
            TemperatureDataset::from_json(&body)?
        }
        None => {
            let client = http_client()?;
            client::fetch_dataset(&client, url).await?
        }
    };

    let svg = gst_chart::svg::render_document(&dataset)?;
    std::fs::write(output, svg)?;
    info!(
        "Rendered {} cells to {output}",
        dataset.monthly_variance.len()
    );
    Ok(())
}
