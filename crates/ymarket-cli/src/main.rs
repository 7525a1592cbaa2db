mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{
    FeedsCommands, HiddenCommands, OffersCommands, OutletsCommands, PricesCommands,
    RegionsCommands,
};

#[derive(Debug, Parser)]
#[command(name = "ymarket-cli")]
#[command(about = "Yandex.Market partner API command line interface")]
struct Cli {
    /// Campaign to act on (overrides `YMARKET_CAMPAIGN_ID`)
    #[arg(long, global = true)]
    campaign_id: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price list feeds
    Feeds {
        #[command(subcommand)]
        command: FeedsCommands,
    },
    /// Offer prices set through the API
    Prices {
        #[command(subcommand)]
        command: PricesCommands,
    },
    /// Offers hidden from the storefront
    Hidden {
        #[command(subcommand)]
        command: HiddenCommands,
    },
    /// Storefront offer search
    Offers {
        #[command(subcommand)]
        command: OffersCommands,
    },
    /// Region lookup
    Regions {
        #[command(subcommand)]
        command: RegionsCommands,
    },
    /// Points of sale
    Outlets {
        #[command(subcommand)]
        command: OutletsCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let settings = config::load_settings()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = settings.client()?;
    match cli.command {
        Commands::Regions { command } => commands::run_regions(&client, command).await,
        Commands::Feeds { command } => {
            let campaign_id = settings.campaign(cli.campaign_id)?;
            commands::run_feeds(&client, campaign_id, command).await
        }
        Commands::Prices { command } => {
            let campaign_id = settings.campaign(cli.campaign_id)?;
            commands::run_prices(&client, campaign_id, command).await
        }
        Commands::Hidden { command } => {
            let campaign_id = settings.campaign(cli.campaign_id)?;
            commands::run_hidden(&client, campaign_id, command).await
        }
        Commands::Offers { command } => {
            let campaign_id = settings.campaign(cli.campaign_id)?;
            commands::run_offers(&client, campaign_id, command).await
        }
        Commands::Outlets { command } => {
            let campaign_id = settings.campaign(cli.campaign_id)?;
            commands::run_outlets(&client, campaign_id, command).await
        }
    }
}
