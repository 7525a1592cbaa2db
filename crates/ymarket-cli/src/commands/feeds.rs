use clap::Subcommand;
use ymarket::MarketClient;

use super::{print_json, print_ok};

/// Sub-commands available under `feeds`.
#[derive(Debug, Subcommand)]
pub enum FeedsCommands {
    /// List feeds registered for the campaign
    List,
    /// Ask the platform to re-download a feed
    Refresh {
        /// Feed to refresh
        #[arg(long)]
        feed_id: i64,
    },
}

pub(crate) async fn run_feeds(
    client: &MarketClient,
    campaign_id: i64,
    command: FeedsCommands,
) -> anyhow::Result<()> {
    match command {
        FeedsCommands::List => print_json(&client.list_feeds(campaign_id).await?),
        FeedsCommands::Refresh { feed_id } => {
            client.refresh_feed(campaign_id, feed_id).await?;
            tracing::info!(campaign_id, feed_id, "feed refresh requested");
            print_ok()
        }
    }
}
