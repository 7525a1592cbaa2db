//! Offer price endpoints.
//!
//! Prices set here override the ones in the feed until removed, either one
//! by one (an [`Offer::removal`] entry) or all at once.

use reqwest::Method;

use crate::client::{check_batch, encode_body, MarketClient};
use crate::error::MarketError;
use crate::query::{OfferPricesQuery, QueryArgs};
use crate::types::{
    NoPayload, Offer, PricedOffer, PricesResult, RemovePricesRequest, ResultPayload,
    SetPricesRequest,
};

/// Most offers a single price update may carry.
pub const MAX_PRICE_UPDATES: usize = 2000;

impl MarketClient {
    /// Sets or removes API prices for up to [`MAX_PRICE_UPDATES`] offers.
    ///
    /// # Errors
    ///
    /// - [`MarketError::BatchTooLarge`] if `offers` is over the limit; nothing
    ///   is sent.
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn set_offer_prices(
        &self,
        campaign_id: i64,
        offers: &[Offer],
    ) -> Result<(), MarketError> {
        const OPERATION: &str = "set prices";
        check_batch(OPERATION, offers.len(), MAX_PRICE_UPDATES)?;
        let body = encode_body(&SetPricesRequest { offers }, OPERATION)?;

        let _: NoPayload = self
            .call(
                Method::POST,
                &format!("/v2/campaigns/{campaign_id}/offer-prices/updates"),
                &QueryArgs::new(),
                Some(body),
                OPERATION,
            )
            .await?;
        Ok(())
    }

    /// Lists offers whose prices were set through the API.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn get_offer_prices(
        &self,
        campaign_id: i64,
        query: &OfferPricesQuery,
    ) -> Result<Vec<PricedOffer>, MarketError> {
        let payload: ResultPayload<PricesResult> = self
            .call(
                Method::GET,
                &format!("/v2/campaigns/{campaign_id}/offer-prices"),
                &query.to_query_args(),
                None,
                "get prices",
            )
            .await?;
        Ok(payload.result.offers)
    }

    /// Drops every API-set price so that feed prices apply again.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn delete_all_offer_prices(&self, campaign_id: i64) -> Result<(), MarketError> {
        const OPERATION: &str = "delete prices";
        let body = encode_body(&RemovePricesRequest { remove_all: true }, OPERATION)?;

        let _: NoPayload = self
            .call(
                Method::POST,
                &format!("/v2/campaigns/{campaign_id}/offer-prices/removals"),
                &QueryArgs::new(),
                Some(body),
                OPERATION,
            )
            .await?;
        Ok(())
    }
}
