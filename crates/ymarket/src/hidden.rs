//! Hidden offer endpoints.

use reqwest::Method;

use crate::client::{check_batch, encode_body, MarketClient};
use crate::error::MarketError;
use crate::query::{HiddenOffersQuery, QueryArgs};
use crate::types::{
    HiddenOffer, HiddenOffersResult, HideOffersRequest, NoPayload, OfferToUnhide, ResultPayload,
    UnhideOffersRequest,
};

/// Most entries a single hide or unhide call may carry.
pub const MAX_HIDDEN_OFFERS_BATCH: usize = 500;

impl MarketClient {
    /// Hides offers from the storefront.
    ///
    /// # Errors
    ///
    /// - [`MarketError::BatchTooLarge`] for more than
    ///   [`MAX_HIDDEN_OFFERS_BATCH`] entries; nothing is sent.
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn hide_offers(
        &self,
        campaign_id: i64,
        offers: &[HiddenOffer],
    ) -> Result<(), MarketError> {
        const OPERATION: &str = "hide offers";
        check_batch(OPERATION, offers.len(), MAX_HIDDEN_OFFERS_BATCH)?;
        let body = encode_body(
            &HideOffersRequest {
                hidden_offers: offers,
            },
            OPERATION,
        )?;

        let _: NoPayload = self
            .call(
                Method::POST,
                &format!("/v2/campaigns/{campaign_id}/hidden-offers"),
                &QueryArgs::new(),
                Some(body),
                OPERATION,
            )
            .await?;
        Ok(())
    }

    /// Lists hidden offers, one page at a time.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn get_hidden_offers(
        &self,
        campaign_id: i64,
        query: &HiddenOffersQuery,
    ) -> Result<HiddenOffersResult, MarketError> {
        let payload: ResultPayload<HiddenOffersResult> = self
            .call(
                Method::GET,
                &format!("/v2/campaigns/{campaign_id}/hidden-offers"),
                &query.to_query_args(),
                None,
                "get hidden offers",
            )
            .await?;
        Ok(payload.result)
    }

    /// Returns hidden offers to the storefront.
    ///
    /// # Errors
    ///
    /// - [`MarketError::BatchTooLarge`] for more than
    ///   [`MAX_HIDDEN_OFFERS_BATCH`] entries; nothing is sent.
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn unhide_offers(
        &self,
        campaign_id: i64,
        offers: &[OfferToUnhide],
    ) -> Result<(), MarketError> {
        const OPERATION: &str = "unhide offers";
        check_batch(OPERATION, offers.len(), MAX_HIDDEN_OFFERS_BATCH)?;
        let body = encode_body(
            &UnhideOffersRequest {
                hidden_offers: offers,
            },
            OPERATION,
        )?;

        let _: NoPayload = self
            .call(
                Method::DELETE,
                &format!("/v2/campaigns/{campaign_id}/hidden-offers"),
                &QueryArgs::new(),
                Some(body),
                OPERATION,
            )
            .await?;
        Ok(())
    }
}
