// Hand-crafted async HTTP client for the association's events API.
//
// Base path: /api/
// Auth: optional `Authorization: Bearer <token>` (admin listing only)

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::records::EventRecord;

/// Error response shape the backend sends on failures: `{"error": "..."}`.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<String>,
}

/// Async client for the events API.
///
/// Cheap to clone is not a goal here; construct once and share by reference,
/// or clone the inner `reqwest::Client` cost (connection pool is shared).
#[derive(Debug, Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    base_url: Url,
}

/// Builder for [`SiteClient`] — site URL plus optional admin token and
/// request timeout.
pub struct SiteClientBuilder {
    base_url: String,
    token: Option<SecretString>,
    timeout: Duration,
}

impl SiteClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Bearer token for admin-only surfaces (`includeUnpublished`).
    pub fn token(mut self, token: Option<SecretString>) -> Self {
        self.token = token;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<SiteClient, Error> {
        let mut headers = HeaderMap::new();
        if let Some(ref token) = self.token {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {}", token.expose_secret())).map_err(
                    |_| Error::Unauthorized {
                        message: "API token is not a valid header value".to_owned(),
                    },
                )?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        let base_url = normalize_base_url(&self.base_url)?;
        Ok(SiteClient { http, base_url })
    }
}

/// Ensure the base URL ends with a single trailing slash so `Url::join`
/// with relative paths behaves.
fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let mut url = Url::parse(raw)?;
    let path = url.path().trim_end_matches('/').to_owned();
    url.set_path(&format!("{path}/"));
    Ok(url)
}

impl SiteClient {
    /// Construct with defaults (no token, 30 s timeout).
    pub fn new(base_url: &str) -> Result<Self, Error> {
        SiteClientBuilder::new(base_url).build()
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch the event list. `include_unpublished` requires an admin token
    /// and returns drafts as well; without it the backend serves only
    /// published events.
    pub async fn list_events(
        &self,
        include_unpublished: bool,
    ) -> Result<Vec<EventRecord>, Error> {
        let url = self.url("api/events")?;
        debug!(%url, include_unpublished, "GET events");

        let mut req = self.http.get(url);
        if include_unpublished {
            req = req.query(&[("includeUnpublished", "true")]);
        }
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    /// Fetch a single event by its identifier.
    pub async fn get_event(&self, id: &str) -> Result<EventRecord, Error> {
        let url = self.url(&format!("api/events/{id}"))?;
        debug!(%url, "GET event");

        let resp = self.http.get(url).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { id: id.to_owned() });
        }
        self.handle_response(resp).await
    }

    // ── Plumbing ─────────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// Decode a success body, or map an error status to our taxonomy,
    /// preferring the backend's `{"error": "..."}` message when present.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.bytes().await?;
            return serde_json::from_slice(&body).map_err(Error::Decode);
        }

        let message = resp
            .bytes()
            .await
            .ok()
            .and_then(|b| serde_json::from_slice::<ErrorResponse>(&b).ok())
            .and_then(|e| e.error)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_owned());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(Error::Unauthorized { message })
            }
            _ => Err(Error::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }
}
