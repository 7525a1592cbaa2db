//! Optional query parameters for list endpoints.
//!
//! Each query type collects its fields through chained setters; a later call
//! overwrites whatever an earlier call set for the same field. Nothing is
//! resolved until [`to_query_args`](OfferPricesQuery::to_query_args) runs, at
//! which point pagination modes are picked by precedence:
//! continuation token, then page number/size, then limit/offset.

use crate::types::Currency;

/// Ordered query-string pairs, appended to the request URL as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs(Vec<(&'static str, String)>);

impl QueryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl ToString) {
        self.0.push((key, value.to_string()));
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<V: ToString> FromIterator<(&'static str, V)> for QueryArgs {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k, v.to_string())).collect())
    }
}

// ---------------------------------------------------------------------------
// Shared pagination
// ---------------------------------------------------------------------------

/// Wire names an endpoint uses for each pagination mode.
struct PagingKeys {
    page_token: Option<&'static str>,
    page_number: &'static str,
    page_size: &'static str,
    limit: Option<&'static str>,
    offset: Option<&'static str>,
}

/// All pagination fields a caller may set. At most one mode is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Pagination {
    page_token: Option<String>,
    page_number: Option<u32>,
    page_size: Option<u32>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl Pagination {
    fn write(&self, keys: &PagingKeys, query: &mut QueryArgs) {
        let token = self.page_token.as_deref().filter(|t| !t.is_empty());
        if let (Some(token_key), Some(token)) = (keys.page_token, token) {
            query.push(token_key, token);
            if let (Some(limit_key), Some(limit)) = (keys.limit, self.limit) {
                query.push(limit_key, limit);
            }
            return;
        }

        if let (Some(number), Some(size)) = (self.page_number, self.page_size) {
            if number != 0 && size != 0 {
                query.push(keys.page_number, number);
                query.push(keys.page_size, size);
                return;
            }
        }

        if let (Some(limit_key), Some(limit)) = (keys.limit, self.limit) {
            query.push(limit_key, limit);
        }
        if let (Some(offset_key), Some(offset)) = (keys.offset, self.offset) {
            query.push(offset_key, offset);
        }
    }
}

// ---------------------------------------------------------------------------
// Offer prices
// ---------------------------------------------------------------------------

const OFFER_PRICES_KEYS: PagingKeys = PagingKeys {
    page_token: None,
    page_number: "page",
    page_size: "pageSize",
    limit: Some("limit"),
    offset: Some("offset"),
};

/// Pagination for offers whose prices were set through the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferPricesQuery {
    paging: Pagination,
}

impl OfferPricesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit_offset(mut self, limit: u32, offset: u32) -> Self {
        self.paging.limit = Some(limit);
        self.paging.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn page(mut self, number: u32, size: u32) -> Self {
        self.paging.page_number = Some(number);
        self.paging.page_size = Some(size);
        self
    }

    pub fn to_query_args(&self) -> QueryArgs {
        let mut query = QueryArgs::new();
        self.paging.write(&OFFER_PRICES_KEYS, &mut query);
        query
    }
}

// ---------------------------------------------------------------------------
// Hidden offers
// ---------------------------------------------------------------------------

const HIDDEN_OFFERS_KEYS: PagingKeys = PagingKeys {
    page_token: Some("page_token"),
    page_number: "page_number",
    page_size: "page_size",
    limit: Some("limit"),
    offset: Some("offset"),
};

/// Pagination and filters for the hidden offers listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenOffersQuery {
    paging: Pagination,
    feed_id: Option<i64>,
    offer_id: Option<String>,
}

impl HiddenOffersQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.paging.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.paging.offset = Some(offset);
        self
    }

    /// Continuation token from a previous page's `paging.nextPageToken`.
    ///
    /// A non-empty token sends `page_token` together with [`limit`] as the
    /// page size. [`offset`] and [`page`] are ignored in this mode.
    ///
    /// [`limit`]: Self::limit
    /// [`offset`]: Self::offset
    /// [`page`]: Self::page
    #[must_use]
    pub fn page_token(mut self, token: impl Into<String>) -> Self {
        self.paging.page_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn page(mut self, number: u32, size: u32) -> Self {
        self.paging.page_number = Some(number);
        self.paging.page_size = Some(size);
        self
    }

    #[must_use]
    pub fn feed_id(mut self, feed_id: i64) -> Self {
        self.feed_id = Some(feed_id);
        self
    }

    #[must_use]
    pub fn offer_id(mut self, offer_id: impl Into<String>) -> Self {
        self.offer_id = Some(offer_id.into());
        self
    }

    pub fn to_query_args(&self) -> QueryArgs {
        let mut query = QueryArgs::new();
        self.paging.write(&HIDDEN_OFFERS_KEYS, &mut query);
        if let Some(feed_id) = self.feed_id.filter(|id| *id > 0) {
            query.push("feed_id", feed_id);
        }
        if let Some(offer_id) = self.offer_id.as_deref().filter(|id| !id.is_empty()) {
            query.push("offer_id", offer_id);
        }
        query
    }
}

// ---------------------------------------------------------------------------
// Explore
// ---------------------------------------------------------------------------

const EXPLORE_KEYS: PagingKeys = PagingKeys {
    page_token: None,
    page_number: "page",
    page_size: "pageSize",
    limit: None,
    offset: None,
};

/// Filters for exploring the campaign's storefront offers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploreQuery {
    paging: Pagination,
    currency: Option<Currency>,
    feed_id: Option<i64>,
    matched: Option<bool>,
    query: Option<String>,
    shop_category_id: Option<String>,
}

impl ExploreQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests page `number` (from 1) of `size` offers.
    ///
    /// `page` and `pageSize` are sent as a pair. If either is zero neither is
    /// sent, and the platform falls back to its own defaults for both.
    #[must_use]
    pub fn page(mut self, number: u32, size: u32) -> Self {
        self.paging.page_number = Some(number);
        self.paging.page_size = Some(size);
        self
    }

    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    #[must_use]
    pub fn feed_id(mut self, feed_id: i64) -> Self {
        self.feed_id = Some(feed_id);
        self
    }

    /// `true` keeps only offers matched to a catalog card, `false` only
    /// unmatched ones. Unset returns both.
    #[must_use]
    pub fn matched(mut self, matched: bool) -> Self {
        self.matched = Some(matched);
        self
    }

    /// Free-text search over offer names.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn shop_category_id(mut self, id: impl Into<String>) -> Self {
        self.shop_category_id = Some(id.into());
        self
    }

    pub fn to_query_args(&self) -> QueryArgs {
        let mut query = QueryArgs::new();
        if let Some(currency) = &self.currency {
            query.push("currency", currency);
        }
        if let Some(id) = self.shop_category_id.as_deref().filter(|id| !id.is_empty()) {
            query.push("shopCategoryId", id);
        }
        if let Some(text) = self.query.as_deref().filter(|q| !q.is_empty()) {
            query.push("query", text);
        }
        self.paging.write(&EXPLORE_KEYS, &mut query);
        if let Some(feed_id) = self.feed_id.filter(|id| *id > 0) {
            query.push("feedId", feed_id);
        }
        if let Some(matched) = self.matched {
            query.push("matched", matched);
        }
        query
    }
}

// ---------------------------------------------------------------------------
// Points of sale
// ---------------------------------------------------------------------------

const POINTS_OF_SALE_KEYS: PagingKeys = PagingKeys {
    page_token: Some("page_token"),
    page_number: "page",
    page_size: "pageSize",
    limit: Some("limit"),
    offset: None,
};

/// Pagination and filters for the point of sale listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsOfSaleQuery {
    paging: Pagination,
    region_id: Option<i64>,
    shop_outlet_code: Option<String>,
}

impl PointsOfSaleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(mut self, number: u32, size: u32) -> Self {
        self.paging.page_number = Some(number);
        self.paging.page_size = Some(size);
        self
    }

    #[must_use]
    pub fn page_token(mut self, token: impl Into<String>, limit: u32) -> Self {
        self.paging.page_token = Some(token.into());
        self.paging.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn region_id(mut self, region_id: i64) -> Self {
        self.region_id = Some(region_id);
        self
    }

    /// The seller's own code for the outlet.
    #[must_use]
    pub fn shop_outlet_code(mut self, code: impl Into<String>) -> Self {
        self.shop_outlet_code = Some(code.into());
        self
    }

    pub fn to_query_args(&self) -> QueryArgs {
        let mut query = QueryArgs::new();
        self.paging.write(&POINTS_OF_SALE_KEYS, &mut query);
        if let Some(region_id) = self.region_id.filter(|id| *id > 0) {
            query.push("region_id", region_id);
        }
        if let Some(code) = self.shop_outlet_code.as_deref().filter(|c| !c.is_empty()) {
            query.push("shop_outlet_code", code);
        }
        query
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
