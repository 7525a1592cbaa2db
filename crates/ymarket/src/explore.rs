//! Storefront offer search.

use reqwest::Method;

use crate::client::MarketClient;
use crate::error::MarketError;
use crate::query::ExploreQuery;
use crate::types::ExploreOffersResult;

impl MarketClient {
    /// Returns the campaign's offers as the storefront sees them, filtered by
    /// `query`.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn explore_offers(
        &self,
        campaign_id: i64,
        query: &ExploreQuery,
    ) -> Result<ExploreOffersResult, MarketError> {
        self.call(
            Method::GET,
            &format!("/v2/campaigns/{campaign_id}/offers"),
            &query.to_query_args(),
            None,
            "explore offers",
        )
        .await
    }
}
