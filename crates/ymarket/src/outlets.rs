//! Point of sale (outlet) endpoints.

use reqwest::Method;

use crate::client::{encode_body, MarketClient};
use crate::error::MarketError;
use crate::query::{PointsOfSaleQuery, QueryArgs};
use crate::types::{CreatedOutlet, NoPayload, PointOfSale, PointsOfSalePage, ResultPayload};

impl MarketClient {
    /// Registers a new point of sale and returns its generated id.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn create_point_of_sale(
        &self,
        campaign_id: i64,
        outlet: &PointOfSale,
    ) -> Result<CreatedOutlet, MarketError> {
        const OPERATION: &str = "create point of sale";
        let body = encode_body(outlet, OPERATION)?;

        let payload: ResultPayload<CreatedOutlet> = self
            .call(
                Method::POST,
                &format!("/v2/campaigns/{campaign_id}/outlets"),
                &QueryArgs::new(),
                Some(body),
                OPERATION,
            )
            .await?;
        tracing::debug!(campaign_id, outlet_id = payload.result.id, "point of sale created");
        Ok(payload.result)
    }

    /// Replaces every field of an existing point of sale.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn update_point_of_sale(
        &self,
        campaign_id: i64,
        outlet_id: i64,
        outlet: &PointOfSale,
    ) -> Result<(), MarketError> {
        const OPERATION: &str = "update point of sale";
        let body = encode_body(outlet, OPERATION)?;

        let _: NoPayload = self
            .call(
                Method::PUT,
                &format!("/v2/campaigns/{campaign_id}/outlets/{outlet_id}"),
                &QueryArgs::new(),
                Some(body),
                OPERATION,
            )
            .await?;
        Ok(())
    }

    /// Fetches one point of sale.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn get_point_of_sale(
        &self,
        campaign_id: i64,
        outlet_id: i64,
    ) -> Result<PointOfSale, MarketError> {
        self.call(
            Method::GET,
            &format!("/v2/campaigns/{campaign_id}/outlets/{outlet_id}"),
            &QueryArgs::new(),
            None,
            "get point of sale",
        )
        .await
    }

    /// Removes a point of sale.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn delete_point_of_sale(
        &self,
        campaign_id: i64,
        outlet_id: i64,
    ) -> Result<(), MarketError> {
        let _: NoPayload = self
            .call(
                Method::DELETE,
                &format!("/v2/campaigns/{campaign_id}/outlets/{outlet_id}"),
                &QueryArgs::new(),
                None,
                "delete point of sale",
            )
            .await?;
        Ok(())
    }

    /// Lists the campaign's points of sale, one page at a time.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Api`] if the API returns an error status.
    /// - [`MarketError::Http`] on network failure.
    /// - [`MarketError::Deserialize`] if the response shape is unexpected.
    pub async fn list_points_of_sale(
        &self,
        campaign_id: i64,
        query: &PointsOfSaleQuery,
    ) -> Result<PointsOfSalePage, MarketError> {
        self.call(
            Method::GET,
            &format!("/v2/campaigns/{campaign_id}/outlets"),
            &query.to_query_args(),
            None,
            "get points of sale",
        )
        .await
    }
}
