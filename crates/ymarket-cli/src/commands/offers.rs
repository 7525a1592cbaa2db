use clap::Subcommand;
use ymarket::{Currency, ExploreQuery, MarketClient};

use super::print_json;

/// Sub-commands available under `offers`.
#[derive(Debug, Subcommand)]
pub enum OffersCommands {
    /// Search the campaign's offers as the storefront shows them
    Explore {
        /// Currency of the returned prices (RUR, BYN, KZT, UAH)
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        feed_id: Option<i64>,
        /// Only offers matched (true) or not matched (false) to a catalog card
        #[arg(long)]
        matched: Option<bool>,
        /// Free-text search over offer names
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        shop_category_id: Option<String>,
        /// Page number, starting at 1
        #[arg(long, requires = "page_size")]
        page: Option<u32>,
        #[arg(long, requires = "page")]
        page_size: Option<u32>,
    },
}

pub(crate) async fn run_offers(
    client: &MarketClient,
    campaign_id: i64,
    command: OffersCommands,
) -> anyhow::Result<()> {
    match command {
        OffersCommands::Explore {
            currency,
            feed_id,
            matched,
            query: text,
            shop_category_id,
            page,
            page_size,
        } => {
            let mut query = ExploreQuery::new();
            if let Some(currency) = currency {
                query = query.currency(Currency::from(currency.to_uppercase()));
            }
            if let Some(feed_id) = feed_id {
                query = query.feed_id(feed_id);
            }
            if let Some(matched) = matched {
                query = query.matched(matched);
            }
            if let Some(text) = text {
                query = query.query(text);
            }
            if let Some(id) = shop_category_id {
                query = query.shop_category_id(id);
            }
            if let (Some(page), Some(page_size)) = (page, page_size) {
                query = query.page(page, page_size);
            }
            print_json(&client.explore_offers(campaign_id, &query).await?)
        }
    }
}
