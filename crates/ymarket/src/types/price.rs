use serde::{Deserialize, Serialize};

use super::Currency;

/// Request body for price updates: `{ "offers": [...] }`.
#[derive(Debug, Serialize)]
pub(crate) struct SetPricesRequest<'a> {
    pub offers: &'a [Offer],
}

/// Request body that drops every API-set price at once.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemovePricesRequest {
    pub remove_all: bool,
}

/// Reference to the feed an offer belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedRef {
    pub id: i64,
}

/// A price update (or removal, with `delete: true`) for one offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub feed: FeedRef,
    pub id: String,
    #[serde(default)]
    pub delete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

impl Offer {
    /// Sets `price` for the offer `offer_id` of feed `feed_id`.
    pub fn with_price(feed_id: i64, offer_id: impl Into<String>, price: Price) -> Self {
        Self {
            feed: FeedRef { id: feed_id },
            id: offer_id.into(),
            delete: false,
            price: Some(price),
        }
    }

    /// Removes the API-set price so the feed price applies again.
    pub fn removal(feed_id: i64, offer_id: impl Into<String>) -> Self {
        Self {
            feed: FeedRef { id: feed_id },
            id: offer_id.into(),
            delete: true,
            price: None,
        }
    }
}

/// Offer price. `discount_base` is the crossed-out price shown next to `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub currency_id: Currency,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_base: Option<f64>,
}

/// `result` of the price listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PricesResult {
    #[serde(deserialize_with = "super::null_as_default")]
    pub offers: Vec<PricedOffer>,
    pub total: i64,
}

/// An offer whose price was set through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedOffer {
    #[serde(default)]
    pub feed: FeedRef,
    pub id: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
