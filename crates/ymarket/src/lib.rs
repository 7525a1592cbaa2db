//! Typed async client for the Yandex.Market partner API.
//!
//! Covers feeds, API-set offer prices, hidden offers, storefront offer
//! search, region lookup, and points of sale. Every call is a single HTTP
//! exchange; there is no retry, caching, or pagination iteration.
//!
//! Requests and responses are logged through `tracing` at `debug` level and
//! error envelopes at `warn`. Nothing is emitted unless the host installs a
//! subscriber.

mod client;
pub mod error;
mod explore;
mod feeds;
mod hidden;
mod outlets;
mod prices;
pub mod query;
mod regions;
pub mod types;

pub use client::{
    ClientConfig, MarketClient, MarketClientBuilder, DEFAULT_API_ENDPOINT, DEFAULT_TIMEOUT,
    DEFAULT_USER_AGENT,
};
pub use error::MarketError;
pub use hidden::MAX_HIDDEN_OFFERS_BATCH;
pub use prices::MAX_PRICE_UPDATES;
pub use query::{ExploreQuery, HiddenOffersQuery, OfferPricesQuery, PointsOfSaleQuery, QueryArgs};
pub use types::{
    Address, ApiError, ApiErrors, CreatedOutlet, Currency, Day, DeliveryRule, ExploreOffersResult,
    ExploredOffer, Feed, FeedRef, HiddenOffer, HiddenOffersResult, Offer, OfferToUnhide,
    OutletType, OutletVisibility, Pager, Paging, PointOfSale, PointsOfSalePage, Price,
    PricedOffer, Region, RegionType, ScheduleItem, Status, WorkingSchedule,
};
pub use reqwest::Method;
