//! Region lookup.

use reqwest::Method;

use crate::client::MarketClient;
use crate::error::MarketError;
use crate::query::QueryArgs;
use crate::types::{Region, RegionsPayload};

impl MarketClient {
    /// Finds regions by name.
    ///
    /// Several regions may share a name; the platform returns up to ten, each
    /// with its parent chain so the right one can be picked.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn find_regions(&self, name: &str) -> Result<Vec<Region>, MarketError> {
        let query: QueryArgs = [("name", name)].into_iter().collect();
        let payload: RegionsPayload = self
            .call(Method::GET, "/v2/regions", &query, None, "find region")
            .await?;
        Ok(payload.regions)
    }
}
