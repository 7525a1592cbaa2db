use std::path::PathBuf;

use clap::Subcommand;
use ymarket::{MarketClient, Offer, OfferPricesQuery};

use super::{print_json, print_ok, read_json_file};

/// Sub-commands available under `prices`.
#[derive(Debug, Subcommand)]
pub enum PricesCommands {
    /// List offers whose prices were set through the API
    Get {
        #[arg(long, requires = "offset")]
        limit: Option<u32>,
        #[arg(long, requires = "limit")]
        offset: Option<u32>,
        /// Page number, starting at 1
        #[arg(long, requires = "page_size")]
        page: Option<u32>,
        #[arg(long, requires = "page")]
        page_size: Option<u32>,
    },
    /// Set or remove prices from a JSON array of offers
    Set {
        /// Path to a JSON file with up to 2000 offers
        #[arg(long)]
        file: PathBuf,
    },
    /// Remove every API-set price so feed prices apply again
    DeleteAll,
}

pub(crate) async fn run_prices(
    client: &MarketClient,
    campaign_id: i64,
    command: PricesCommands,
) -> anyhow::Result<()> {
    match command {
        PricesCommands::Get {
            limit,
            offset,
            page,
            page_size,
        } => {
            let mut query = OfferPricesQuery::new();
            if let (Some(limit), Some(offset)) = (limit, offset) {
                query = query.limit_offset(limit, offset);
            }
            if let (Some(page), Some(page_size)) = (page, page_size) {
                query = query.page(page, page_size);
            }
            print_json(&client.get_offer_prices(campaign_id, &query).await?)
        }
        PricesCommands::Set { file } => {
            let offers: Vec<Offer> = read_json_file(&file)?;
            client.set_offer_prices(campaign_id, &offers).await?;
            tracing::info!(campaign_id, count = offers.len(), "prices updated");
            print_ok()
        }
        PricesCommands::DeleteAll => {
            client.delete_all_offer_prices(campaign_id).await?;
            tracing::info!(campaign_id, "all API prices removed");
            print_ok()
        }
    }
}
