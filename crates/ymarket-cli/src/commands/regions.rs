use clap::Subcommand;
use ymarket::MarketClient;

use super::print_json;

/// Sub-commands available under `regions`.
#[derive(Debug, Subcommand)]
pub enum RegionsCommands {
    /// Look up regions by name (up to ten matches, with parents)
    Find {
        /// Region name, e.g. "Казань"
        name: String,
    },
}

pub(crate) async fn run_regions(
    client: &MarketClient,
    command: RegionsCommands,
) -> anyhow::Result<()> {
    match command {
        RegionsCommands::Find { name } => print_json(&client.find_regions(&name).await?),
    }
}
