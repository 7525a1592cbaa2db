use serde::{Deserialize, Serialize};

use super::Pager;

/// Offers matching an explore query, with page-number pagination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreOffersResult {
    #[serde(deserialize_with = "super::null_as_default")]
    pub offers: Vec<ExploredOffer>,
    pub pager: Pager,
}

/// An offer as seen by the storefront.
///
/// The platform omits fields that do not apply (e.g. `modelId` for offers not
/// matched to a catalog card), so everything defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExploredOffer {
    pub id: String,
    pub feed_id: i64,
    pub name: Option<String>,
    pub url: Option<String>,
    pub bid: Option<f64>,
    pub currency: Option<String>,
    pub cut_price: bool,
    pub discount: Option<i64>,
    pub market_category_id: Option<i64>,
    pub model_id: Option<i64>,
    pub price: Option<f64>,
    pub pre_discount_price: Option<f64>,
    pub shop_category_id: Option<String>,
}
