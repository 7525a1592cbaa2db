//! Feed endpoints.

use reqwest::Method;

use crate::client::MarketClient;
use crate::error::MarketError;
use crate::query::QueryArgs;
use crate::types::{Feed, FeedsPayload, NoPayload};

impl MarketClient {
    /// Lists the feeds registered for a campaign, with the results of the
    /// platform's download and content checks.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn list_feeds(&self, campaign_id: i64) -> Result<Vec<Feed>, MarketError> {
        let payload: FeedsPayload = self
            .call(
                Method::GET,
                &format!("/v2/campaigns/{campaign_id}/feeds"),
                &QueryArgs::new(),
                None,
                "list feeds",
            )
            .await?;
        Ok(payload.feeds)
    }

    /// Tells the platform a feed file changed so it re-downloads it.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn refresh_feed(&self, campaign_id: i64, feed_id: i64) -> Result<(), MarketError> {
        let _: NoPayload = self
            .call(
                Method::POST,
                &format!("/campaigns/{campaign_id}/feeds/{feed_id}/refresh"),
                &QueryArgs::new(),
                None,
                "refresh feed",
            )
            .await?;
        tracing::debug!(campaign_id, feed_id, "feed refresh requested");
        Ok(())
    }
}
