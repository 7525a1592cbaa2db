//! HTTP client for the Yandex.Market partner API.
//!
//! Wraps `reqwest` with the platform's OAuth header scheme, the `.json` path
//! suffix, and typed envelope decoding. Operation methods live in sibling
//! modules as further `impl MarketClient` blocks; they all funnel through
//! [`MarketClient::new_request`] and [`MarketClient::execute`].

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Request, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::MarketError;
use crate::query::QueryArgs;
use crate::types::Envelope;

/// Production base URL of the partner API.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.partner.market.yandex.ru/";

/// User agent sent when the caller does not set one.
pub const DEFAULT_USER_AGENT: &str = concat!("ymarket-rs/", env!("CARGO_PKG_VERSION"));

/// Request timeout of the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const JSON_SUFFIX: &str = ".json";

/// Immutable settings shared by every request a [`MarketClient`] makes.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    oauth_token: String,
    oauth_client_id: String,
    api_endpoint: String,
    user_agent: String,
}

impl ClientConfig {
    pub fn oauth_client_id(&self) -> &str {
        &self.oauth_client_id
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn authorization(&self) -> String {
        format!(
            "OAuth oauth_token={}, oauth_client_id={}",
            self.oauth_token, self.oauth_client_id
        )
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("oauth_token", &"[redacted]")
            .field("oauth_client_id", &self.oauth_client_id)
            .field("api_endpoint", &self.api_endpoint)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Client for the Yandex.Market partner API.
///
/// Cheap to clone; clones share the underlying connection pool. Use
/// [`MarketClient::builder`] to point at a mock server or to supply a
/// preconfigured `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct MarketClient {
    http: Client,
    config: ClientConfig,
}

impl MarketClient {
    /// Creates a client for the production API with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Http`] if the default `reqwest::Client` cannot
    /// be constructed.
    pub fn new(
        oauth_token: impl Into<String>,
        oauth_client_id: impl Into<String>,
    ) -> Result<Self, MarketError> {
        Self::builder().oauth(oauth_token, oauth_client_id).build()
    }

    pub fn builder() -> MarketClientBuilder {
        MarketClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds a request against the configured endpoint.
    ///
    /// `path` is joined to the endpoint with exactly one slash and gets the
    /// `.json` suffix unless it already has it. Query pairs are appended in
    /// the order given. A body marks the request as JSON.
    ///
    /// # Errors
    ///
    /// - [`MarketError::InvalidEndpoint`] if the endpoint is not an absolute
    ///   URL that can carry a path.
    /// - [`MarketError::InvalidHeader`] if the credentials or user agent
    ///   contain bytes not allowed in a header value.
    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        query: &QueryArgs,
        body: Option<Vec<u8>>,
    ) -> Result<Request, MarketError> {
        let url = self.resolve_url(path, query)?;
        let mut request = Request::new(method, url);

        let mut authorization = header_value("authorization", &self.config.authorization())?;
        authorization.set_sensitive(true);

        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(USER_AGENT, header_value("user-agent", &self.config.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }

    /// Sends a request and decodes the whole response body as JSON.
    ///
    /// HTTP status codes are not inspected here; the platform reports
    /// failures through the response envelope.
    ///
    /// # Errors
    ///
    /// - [`MarketError::Http`] on network failure or while reading the body.
    /// - [`MarketError::Deserialize`] if the body does not decode as `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
        context: &str,
    ) -> Result<T, MarketError> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, %url, "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(
            %method,
            %url,
            status = status.as_u16(),
            bytes = body.len(),
            "received response"
        );

        serde_json::from_str(&body).map_err(|source| MarketError::Deserialize {
            context: context.to_owned(),
            source,
        })
    }

    /// Builds, sends, and unwraps an enveloped call.
    ///
    /// The status is checked before the payload is decoded: an `ERROR`
    /// envelope usually carries none of the payload's required fields.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &QueryArgs,
        body: Option<Vec<u8>>,
        operation: &'static str,
    ) -> Result<T, MarketError> {
        let request = self.new_request(method, path, query, body)?;
        let envelope: Envelope<Map<String, Value>> = self.execute(request, operation).await?;
        let payload = envelope.into_result(operation)?;
        serde_json::from_value(Value::Object(payload)).map_err(|source| {
            MarketError::Deserialize {
                context: operation.to_owned(),
                source,
            }
        })
    }

    fn resolve_url(&self, path: &str, query: &QueryArgs) -> Result<Url, MarketError> {
        let endpoint = &self.config.api_endpoint;
        let invalid = |reason: String| MarketError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            reason,
        };

        let mut url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_owned()));
        }

        let mut joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_matches('/')
        );
        if !joined.ends_with(JSON_SUFFIX) {
            joined.push_str(JSON_SUFFIX);
        }
        url.set_path(&joined);
        url.set_query(None);
        url.set_fragment(None);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.iter() {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

/// Chained configuration for [`MarketClient`]. Later calls override earlier
/// ones.
#[derive(Default)]
pub struct MarketClientBuilder {
    oauth_token: String,
    oauth_client_id: String,
    api_endpoint: Option<String>,
    user_agent: Option<String>,
    http_client: Option<Client>,
    timeout: Option<Duration>,
}

impl MarketClientBuilder {
    #[must_use]
    pub fn oauth(mut self, token: impl Into<String>, client_id: impl Into<String>) -> Self {
        self.oauth_token = token.into();
        self.oauth_client_id = client_id.into();
        self
    }

    #[must_use]
    pub fn api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = Some(endpoint.into());
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Transport to send requests through. Replaces the default client, so
    /// [`timeout`](Self::timeout) no longer applies.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finishes the client. Credentials and endpoint are not validated until
    /// the first request.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Http`] if the default `reqwest::Client` cannot
    /// be constructed.
    pub fn build(self) -> Result<MarketClient, MarketError> {
        let http = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .connect_timeout(CONNECT_TIMEOUT)
                .build()?,
        };

        Ok(MarketClient {
            http,
            config: ClientConfig {
                oauth_token: self.oauth_token,
                oauth_client_id: self.oauth_client_id,
                api_endpoint: self
                    .api_endpoint
                    .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_owned()),
                user_agent: self
                    .user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            },
        })
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, MarketError> {
    HeaderValue::from_str(value).map_err(|source| MarketError::InvalidHeader { name, source })
}

/// Rejects a write batch larger than the endpoint accepts.
pub(crate) fn check_batch(
    operation: &'static str,
    len: usize,
    max: usize,
) -> Result<(), MarketError> {
    if len > max {
        return Err(MarketError::BatchTooLarge {
            operation,
            len,
            max,
        });
    }
    Ok(())
}

pub(crate) fn encode_body<B: Serialize>(
    body: &B,
    operation: &'static str,
) -> Result<Vec<u8>, MarketError> {
    serde_json::to_vec(body).map_err(|source| MarketError::Encode {
        context: operation.to_owned(),
        source,
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
