use std::path::PathBuf;

use clap::Subcommand;
use ymarket::{HiddenOffer, HiddenOffersQuery, MarketClient, OfferToUnhide};

use super::{print_json, print_ok, read_json_file};

/// Sub-commands available under `hidden`.
#[derive(Debug, Subcommand)]
pub enum HiddenCommands {
    /// List hidden offers
    List {
        /// Continuation token from a previous page
        #[arg(long)]
        page_token: Option<String>,
        /// Page number, starting at 1
        #[arg(long, requires = "page_size")]
        page: Option<u32>,
        #[arg(long, requires = "page")]
        page_size: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        feed_id: Option<i64>,
        #[arg(long)]
        offer_id: Option<String>,
    },
    /// Hide offers listed in a JSON file
    Hide {
        /// Path to a JSON array of up to 500 hidden offers
        #[arg(long)]
        file: PathBuf,
    },
    /// Unhide offers listed in a JSON file
    Unhide {
        /// Path to a JSON array of up to 500 `{feedId, offerId}` entries
        #[arg(long)]
        file: PathBuf,
    },
}

pub(crate) async fn run_hidden(
    client: &MarketClient,
    campaign_id: i64,
    command: HiddenCommands,
) -> anyhow::Result<()> {
    match command {
        HiddenCommands::List {
            page_token,
            page,
            page_size,
            limit,
            offset,
            feed_id,
            offer_id,
        } => {
            let mut query = HiddenOffersQuery::new();
            if let Some(limit) = limit {
                query = query.limit(limit);
            }
            if let Some(offset) = offset {
                query = query.offset(offset);
            }
            if let (Some(page), Some(page_size)) = (page, page_size) {
                query = query.page(page, page_size);
            }
            if let Some(token) = page_token {
                query = query.page_token(token);
            }
            if let Some(feed_id) = feed_id {
                query = query.feed_id(feed_id);
            }
            if let Some(offer_id) = offer_id {
                query = query.offer_id(offer_id);
            }
            print_json(&client.get_hidden_offers(campaign_id, &query).await?)
        }
        HiddenCommands::Hide { file } => {
            let offers: Vec<HiddenOffer> = read_json_file(&file)?;
            client.hide_offers(campaign_id, &offers).await?;
            tracing::info!(campaign_id, count = offers.len(), "offers hidden");
            print_ok()
        }
        HiddenCommands::Unhide { file } => {
            let offers: Vec<OfferToUnhide> = read_json_file(&file)?;
            client.unhide_offers(campaign_id, &offers).await?;
            tracing::info!(campaign_id, count = offers.len(), "offers unhidden");
            print_ok()
        }
    }
}
