use serde::{Deserialize, Serialize};

use super::Paging;

/// Request body for hiding offers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HideOffersRequest<'a> {
    pub hidden_offers: &'a [HiddenOffer],
}

/// Request body for unhiding offers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UnhideOffersRequest<'a> {
    pub hidden_offers: &'a [OfferToUnhide],
}

/// An offer hidden from the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenOffer {
    pub feed_id: i64,
    pub offer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// How long the offer stays hidden. The platform applies its own
    /// default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_in_hours: Option<i64>,
}

impl HiddenOffer {
    pub fn new(feed_id: i64, offer_id: impl Into<String>) -> Self {
        Self {
            feed_id,
            offer_id: offer_id.into(),
            comment: None,
            ttl_in_hours: None,
        }
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn ttl_in_hours(mut self, hours: i64) -> Self {
        self.ttl_in_hours = Some(hours);
        self
    }
}

/// Identifies an offer to make visible again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferToUnhide {
    pub feed_id: i64,
    pub offer_id: String,
}

impl From<&HiddenOffer> for OfferToUnhide {
    fn from(offer: &HiddenOffer) -> Self {
        Self {
            feed_id: offer.feed_id,
            offer_id: offer.offer_id.clone(),
        }
    }
}

/// `result` of the hidden offers listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HiddenOffersResult {
    #[serde(deserialize_with = "super::null_as_default")]
    pub hidden_offers: Vec<HiddenOffer>,
    pub total: i64,
    pub paging: Paging,
}
