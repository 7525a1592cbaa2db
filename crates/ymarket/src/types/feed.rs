use serde::{Deserialize, Serialize};

use super::Status;

/// Payload of the feed listing: `{ "feeds": [...] }`.
#[derive(Debug, Default, Deserialize)]
pub struct FeedsPayload {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub feeds: Vec<Feed>,
}

/// A price list registered for a campaign, with the results of the
/// platform's automatic checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feed {
    pub id: i64,
    pub url: String,
    pub download: Download,
    pub content: Content,
    pub publication: Publication,
    pub placement: Download,
}

/// Result of the last download attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Download {
    pub status: Status,
}

/// Offer counts found in the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    pub status: Status,
    pub total_offers_count: i64,
    pub rejected_offers_count: i64,
}

/// Publication state of the feed data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    pub full: PublicationTime,
    pub price_and_stock_update: PublicationTime,
    pub status: Status,
}

/// Timestamps as reported by the platform (ISO 8601 with offset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
}
