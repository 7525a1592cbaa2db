//! Yandex.Market partner API request and response types.
//!
//! Almost every response is wrapped in a `{"status": "OK", "errors": [...], ...}`
//! envelope; [`Envelope`] captures that pattern generically and flattens the
//! remaining fields into the payload type.

mod explore;
mod feed;
mod hidden;
mod outlet;
mod price;
mod region;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::MarketError;

pub use explore::{ExploreOffersResult, ExploredOffer};
pub use feed::{Content, Download, Feed, FeedsPayload, Publication, PublicationTime};
pub use hidden::{HiddenOffer, HiddenOffersResult, OfferToUnhide};
pub use outlet::{
    Address, CreatedOutlet, Day, DeliveryRule, OutletType, OutletVisibility, PointOfSale,
    PointsOfSalePage, ScheduleItem, WorkingSchedule,
};
pub use price::{FeedRef, Offer, Price, PricedOffer, PricesResult};
pub use region::{Ancestors, Region, RegionType, RegionsPayload};

pub(crate) use hidden::{HideOffersRequest, UnhideOffersRequest};
pub(crate) use price::{RemovePricesRequest, SetPricesRequest};

/// Declares a closed set of wire tokens with a catch-all for tokens the
/// platform adds later. Round-trips through `String` so unknown values are
/// re-serialized byte for byte.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Token not known to this client, kept verbatim.
            Other(String),
        }

        impl $name {
            /// The exact wire token.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s.to_owned()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// Status reported by the envelope and by feed processing stages.
    pub enum Status {
        /// Not available.
        Na => "NA",
        Ok => "OK",
        Error => "ERROR",
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Na
    }
}

impl Status {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

wire_enum! {
    /// Currencies accepted by the platform.
    pub enum Currency {
        /// Russian ruble.
        Rur => "RUR",
        /// Belarusian ruble.
        Byn => "BYN",
        /// Kazakh tenge.
        Kzt => "KZT",
        /// Ukrainian hryvnia.
        Uah => "UAH",
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Top-level envelope for API responses.
///
/// The client decodes the payload as a raw JSON object first and only maps it
/// to the operation's type once `status` is known not to be `ERROR`.
///
/// `status` is absent on a few endpoints (feed listing); it then decodes as
/// [`Status::Na`] and the payload is taken as authoritative.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Status,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: ApiErrors,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwraps the payload, or fails with every error the platform reported.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Api`] when `status` is `ERROR`.
    pub fn into_result(self, operation: &'static str) -> Result<T, MarketError> {
        if self.status.is_error() {
            tracing::warn!(operation, errors = %self.errors, "API returned an error envelope");
            return Err(MarketError::Api {
                operation,
                errors: self.errors,
            });
        }
        Ok(self.data)
    }
}

/// Payload for endpoints that only report a status.
#[derive(Debug, Default, Deserialize)]
pub struct NoPayload {}

/// Payload nested under a `result` key.
#[derive(Debug, Deserialize)]
pub struct ResultPayload<T> {
    pub result: T,
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A single `{code, message}` entry from the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Ordered list of envelope errors.
///
/// Displays as `err[0]: <message>, code: <code>;err[1]: ...` so that a single
/// error value still carries every entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiErrors(pub Vec<ApiError>);

impl ApiErrors {
    pub fn as_slice(&self) -> &[ApiError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            write!(f, "err[{i}]: {}, code: {};", err.message, err.code)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Page-number pagination summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pager {
    pub current_page: i64,
    pub from: i64,
    pub pages_count: i64,
    pub page_size: i64,
    pub to: i64,
    pub total: i64,
}

/// Continuation tokens for token-based pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_display_tags_each_entry_with_its_index() {
        let errors = ApiErrors(vec![
            ApiError {
                code: "A".to_owned(),
                message: "bad".to_owned(),
            },
            ApiError {
                code: "B".to_owned(),
                message: "worse".to_owned(),
            },
        ]);
        assert_eq!(
            errors.to_string(),
            "err[0]: bad, code: A;err[1]: worse, code: B;"
        );
    }

    #[test]
    fn error_envelope_keeps_every_entry_in_order() {
        let body = serde_json::json!({
            "status": "ERROR",
            "errors": [
                { "code": "A", "message": "bad" },
                { "code": "B", "message": "worse" }
            ]
        });
        let envelope: Envelope<NoPayload> = serde_json::from_value(body).unwrap();
        let err = envelope.into_result("refresh feed").unwrap_err();

        let text = err.to_string();
        let first = text.find("err[0]: bad, code: A;").expect("first entry");
        let second = text.find("err[1]: worse, code: B;").expect("second entry");
        assert!(first < second, "entries out of order: {text}");

        let entries = err.api_errors().expect("api error");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].code, "B");
    }

    #[test]
    fn error_envelope_without_payload_still_reports_errors() {
        let body = serde_json::json!({
            "status": "ERROR",
            "errors": [{ "code": "NOT_FOUND", "message": "no such outlet" }]
        });
        let envelope: Envelope<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_value(body).unwrap();
        assert!(envelope.data.is_empty());

        let err = envelope.into_result("get point of sale").unwrap_err();
        assert_eq!(err.api_errors().map(<[ApiError]>::len), Some(1));
    }

    #[test]
    fn missing_status_is_not_available() {
        let envelope: Envelope<FeedsPayload> =
            serde_json::from_value(serde_json::json!({ "feeds": [] })).unwrap();
        assert_eq!(envelope.status, Status::Na);
        assert!(envelope.into_result("list feeds").is_ok());
    }

    #[test]
    fn null_errors_decode_as_empty() {
        let envelope: Envelope<NoPayload> =
            serde_json::from_value(serde_json::json!({ "status": "OK", "errors": null }))
                .unwrap();
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn unknown_status_token_is_preserved() {
        let status: Status = serde_json::from_value(serde_json::json!("PENDING")).unwrap();
        assert_eq!(status, Status::Other("PENDING".to_owned()));
        assert_eq!(serde_json::to_value(&status).unwrap(), "PENDING");
        assert!(!status.is_error());
    }

    #[test]
    fn currency_round_trips_known_tokens() {
        let currency: Currency = serde_json::from_value(serde_json::json!("KZT")).unwrap();
        assert_eq!(currency, Currency::Kzt);
        assert_eq!(currency.to_string(), "KZT");
    }
}
