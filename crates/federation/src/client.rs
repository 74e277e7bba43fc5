//! `ActivityPub` HTTP client.
//!
//! Performs the two wire operations the delivery core needs: dereference
//! (GET) of actor/collection IRIs and delivery (POST) of activities to
//! remote inboxes, with content negotiation fixed to the ActivityStreams
//! media type.

#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::Utc;
use fanout_common::config::DeliveryConfig;
use fanout_common::{AppError, AppResult};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};
use url::Url;

use crate::resolver::Dereferencer;

/// The ActivityStreams media type, used verbatim for `Accept` and
/// `Content-Type`.
pub const ACTIVITY_STREAMS_MEDIA_TYPE: &str =
    "application/ld+json; profile=\"https://www.w3.org/ns/activitystreams\"";

/// Product suffix appended to the configured User-Agent fragment.
const USER_AGENT_SUFFIX: &str = " (fanout-rs ActivityPub)";

/// Error type for AP client operations.
#[derive(Debug, thiserror::Error)]
pub enum ApClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Request to {url} returned status {status}")]
    RequestFailed { status: u16, url: String },
}

impl From<ApClientError> for AppError {
    fn from(err: ApClientError) -> Self {
        Self::Federation(err.to_string())
    }
}

/// `ActivityPub` HTTP client.
#[derive(Clone)]
pub struct ApClient {
    client: Client,
    user_agent: String,
}

impl ApClient {
    /// Create a new AP client from delivery configuration.
    #[must_use]
    pub fn new(config: &DeliveryConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        let user_agent = format!("{}{USER_AGENT_SUFFIX}", config.user_agent);

        Self { client, user_agent }
    }

    /// Dereference a remote IRI, requiring HTTP 200 and returning the
    /// parsed JSON body. No retries.
    pub async fn dereference(&self, url: &Url) -> Result<Value, ApClientError> {
        debug!(url = %url, "Dereferencing remote IRI");

        let response = self
            .client
            .get(url.clone())
            .header("Accept", ACTIVITY_STREAMS_MEDIA_TYPE)
            .header("Accept-Charset", "utf-8")
            .header("Date", rfc1123_date())
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() != 200 {
            error!(url = %url, status = %status, "Dereference failed");
            return Err(ApClientError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// POST an activity to a remote inbox. Any non-200 status is an
    /// error. No retries.
    pub async fn post_to_inbox(&self, body: &Value, url: &Url) -> Result<(), ApClientError> {
        debug!(
            inbox = %url,
            activity_type = body.get("type").and_then(serde_json::Value::as_str).unwrap_or("Unknown"),
            "Delivering activity"
        );

        let response = self
            .client
            .post(url.clone())
            .header("Content-Type", ACTIVITY_STREAMS_MEDIA_TYPE)
            .header("Accept-Charset", "utf-8")
            .header("Date", rfc1123_date())
            .header("User-Agent", &self.user_agent)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() != 200 {
            error!(inbox = %url, status = %status, "Activity delivery failed");
            return Err(ApClientError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        info!(inbox = %url, "Activity delivered");
        Ok(())
    }
}

#[async_trait]
impl Dereferencer for ApClient {
    async fn dereference(&self, iri: &Url) -> AppResult<Value> {
        Ok(Self::dereference(self, iri).await?)
    }
}

/// Whether a `Content-Type`/`Accept` header value denotes ActivityStreams
/// content. Exact segment comparison after trimming whitespace around
/// `;`-separated segments, not a general media-type parser.
#[must_use]
pub fn is_activity_stream_media_type(header: &str) -> bool {
    let segments: Vec<&str> = header.split(';').map(str::trim).collect();
    let canonical: Vec<&str> = ACTIVITY_STREAMS_MEDIA_TYPE
        .split(';')
        .map(str::trim)
        .collect();
    segments == canonical
}

/// RFC 1123 date for the `Date` header.
fn rfc1123_date() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_user_agent_suffix() {
        let client = ApClient::new(&DeliveryConfig::default());
        assert!(client.user_agent.starts_with("fanout-rs"));
        assert!(client.user_agent.ends_with("(fanout-rs ActivityPub)"));
    }

    #[test]
    fn test_media_type_exact_match() {
        assert!(is_activity_stream_media_type(
            "application/ld+json; profile=\"https://www.w3.org/ns/activitystreams\""
        ));
    }

    #[test]
    fn test_media_type_whitespace_around_semicolons() {
        assert!(is_activity_stream_media_type(
            "application/ld+json ;profile=\"https://www.w3.org/ns/activitystreams\""
        ));
        assert!(is_activity_stream_media_type(
            "application/ld+json;profile=\"https://www.w3.org/ns/activitystreams\""
        ));
    }

    #[test]
    fn test_media_type_rejects_others() {
        assert!(!is_activity_stream_media_type("application/json"));
        assert!(!is_activity_stream_media_type("application/activity+json"));
        assert!(!is_activity_stream_media_type(
            "application/ld+json; profile=\"https://www.w3.org/ns/activitystreams\"; charset=utf-8"
        ));
        // Case-sensitive, by design.
        assert!(!is_activity_stream_media_type(
            "Application/ld+json; profile=\"https://www.w3.org/ns/activitystreams\""
        ));
    }

    #[test]
    fn test_rfc1123_date_shape() {
        let date = rfc1123_date();
        assert!(date.ends_with(" GMT"));
        // e.g. "Sat, 30 Aug 2026 12:00:00 GMT"
        assert_eq!(date.len(), 29);
    }
}
