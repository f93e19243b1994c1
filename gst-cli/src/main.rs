//! GST CLI - fetch the global temperature dataset and render heat maps.

use clap::Parser;

mod cmd;

#[derive(Parser)]
#[command(
    name = "gst-cli",
    version,
    about = "Global land-surface temperature heat map toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cmd::run(cli.command).await
}
