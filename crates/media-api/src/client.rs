//! Resource client for the platform API.
//!
//! One [`ApiClient`] per page session. All endpoint wrappers are thin: they
//! build the URL and delegate to a single send primitive which normalizes
//! the success/error shapes. Failures are always logged before they are
//! returned, and nothing here retries — every failure surfaces to the caller
//! immediately.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, warn};

use crate::analytics::ViewEvent;
use crate::config::ApiConfig;
use crate::embedded::PageContext;
use crate::resources::{
    Channel, ListQuery, MediaItem, MediaItemCreate, MediaUpload, Playlist, Profile, ResourceList,
};

/// Header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// How an API call can fail. See the crate docs for the taxonomy: transport
/// failures propagate unchanged, error responses carry the parsed body, and
/// decode failures of embedded payloads propagate as raised.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response, or a body failed to
    /// decode as JSON.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status. `body` is the parsed
    /// JSON error body.
    #[error("API request returned error response")]
    ErrorResponse {
        status: StatusCode,
        body: serde_json::Value,
    },

    /// A page-embedded payload failed to decode into the expected resource.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The `detail` field of an error response body, when present. Handy
    /// for one-line status messages.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::ErrorResponse { body, .. } => {
                body.get("detail").and_then(|detail| detail.as_str())
            }
            _ => None,
        }
    }
}

/// Authenticated access to the platform API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    context: PageContext,
}

impl ApiClient {
    /// Build a client from configuration and the parsed start page.
    ///
    /// The content type, anti-forgery token and session cookie are attached
    /// once here and ride along on every request.
    pub fn new(api: &ApiConfig, context: PageContext) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        match HeaderValue::from_str(context.csrf_token()) {
            Ok(value) => {
                headers.insert(CSRF_HEADER, value);
            }
            Err(e) => warn!("ignoring unusable anti-forgery token: {}", e),
        }
        if !api.session_cookie.is_empty() {
            match HeaderValue::from_str(&api.session_cookie) {
                Ok(value) => {
                    headers.insert(COOKIE, value);
                }
                Err(e) => warn!("ignoring unusable session cookie: {}", e),
            }
        }

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            context,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// The one primitive every wrapper goes through.
    ///
    /// Non-success statuses are logged raw, then the body is decoded as JSON
    /// and returned inside the error descriptor. Transport and decode
    /// failures are logged and propagated unchanged.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!("API fetch error: {}", e);
                return Err(ApiError::Transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            // Log the raw response before the body is consumed.
            error!("API error response: {} from {}", status, response.url());
            let body = match response.json::<serde_json::Value>().await {
                Ok(body) => body,
                Err(e) => {
                    error!("API fetch error: {}", e);
                    return Err(ApiError::Transport(e));
                }
            };
            return Err(ApiError::ErrorResponse { status, body });
        }

        match response.json::<T>().await {
            Ok(value) => Ok(value),
            Err(e) => {
                error!("API fetch error: {}", e);
                Err(ApiError::Transport(e))
            }
        }
    }

    // ── Media ────────────────────────────────────────────────────────────────

    /// List media items. Safe to call repeatedly.
    pub async fn media_list(&self, query: &ListQuery) -> Result<ResourceList<MediaItem>, ApiError> {
        self.media_list_at(&self.endpoint("media/"), query).await
    }

    /// List media from an explicit endpoint instead of the default list —
    /// channels and playlists point at their media collection this way.
    pub async fn media_list_at(
        &self,
        endpoint: &str,
        query: &ListQuery,
    ) -> Result<ResourceList<MediaItem>, ApiError> {
        self.send(self.http.get(endpoint).query(&query.pairs()))
            .await
    }

    /// Create a new media item. Not idempotent: call at most once per user
    /// action.
    pub async fn media_create(&self, body: &MediaItemCreate) -> Result<MediaItem, ApiError> {
        self.send(self.http.post(self.endpoint("media/")).json(body))
            .await
    }

    /// Retrieve one media item, consulting the page-embedded cache first.
    pub async fn media_get(&self, id: &str) -> Result<MediaItem, ApiError> {
        if let Some(embedded) = self.context.take_resource(id) {
            return Ok(serde_json::from_value(embedded)?);
        }
        self.send(self.http.get(self.endpoint(&format!("media/{}", id))))
            .await
    }

    /// Patch an existing media item. Not idempotent: call at most once per
    /// user action, and assume the item is unchanged unless success is
    /// observed.
    pub async fn media_patch(&self, item: &MediaItem) -> Result<MediaItem, ApiError> {
        let id = item.id.as_deref().unwrap_or("");
        self.send(
            self.http
                .patch(self.endpoint(&format!("media/{}", id)))
                .json(item),
        )
        .await
    }

    /// Retrieve the upload target for a media item.
    pub async fn media_upload_get(&self, id: &str) -> Result<MediaUpload, ApiError> {
        self.send(
            self.http
                .get(self.endpoint(&format!("media/{}/upload", id))),
        )
        .await
    }

    /// Retrieve the raw per-day view rows for a media item.
    pub async fn media_analytics(&self, id: &str) -> Result<Vec<ViewEvent>, ApiError> {
        self.send(
            self.http
                .get(self.endpoint(&format!("media/{}/analytics", id))),
        )
        .await
    }

    // ── Channels ─────────────────────────────────────────────────────────────

    pub async fn channel_list(&self, query: &ListQuery) -> Result<ResourceList<Channel>, ApiError> {
        self.send(
            self.http
                .get(self.endpoint("channels/"))
                .query(&query.pairs()),
        )
        .await
    }

    /// Retrieve one channel, consulting the page-embedded cache first.
    pub async fn channel_get(&self, id: &str) -> Result<Channel, ApiError> {
        if let Some(embedded) = self.context.take_resource(id) {
            return Ok(serde_json::from_value(embedded)?);
        }
        self.send(self.http.get(self.endpoint(&format!("channels/{}", id))))
            .await
    }

    // ── Playlists ────────────────────────────────────────────────────────────

    pub async fn playlist_list(
        &self,
        query: &ListQuery,
    ) -> Result<ResourceList<Playlist>, ApiError> {
        self.send(
            self.http
                .get(self.endpoint("playlists/"))
                .query(&query.pairs()),
        )
        .await
    }

    /// Retrieve one playlist, consulting the page-embedded cache first.
    pub async fn playlist_get(&self, id: &str) -> Result<Playlist, ApiError> {
        if let Some(embedded) = self.context.take_resource(id) {
            return Ok(serde_json::from_value(embedded)?);
        }
        self.send(self.http.get(self.endpoint(&format!("playlists/{}", id))))
            .await
    }

    // ── Profile ──────────────────────────────────────────────────────────────

    /// The current user's profile. The page-embedded profile, when present,
    /// is returned on every call for the page lifetime — it is never
    /// invalidated, unlike embedded resources.
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        if let Some(profile) = self.context.profile() {
            return Ok(profile);
        }
        self.send(self.http.get(self.endpoint("profile"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn client() -> ApiClient {
        let api = ApiConfig {
            base_url: "https://media.test/".to_string(),
            session_cookie: String::new(),
        };
        ApiClient::new(&api, PageContext::empty()).unwrap()
    }

    #[test]
    fn test_endpoint_builds_under_api_root() {
        let client = client();
        assert_eq!(client.endpoint("media/"), "https://media.test/api/media/");
        assert_eq!(
            client.endpoint("media/m1/upload"),
            "https://media.test/api/media/m1/upload"
        );
    }

    #[test]
    fn test_error_response_display_is_generic() {
        let error = ApiError::ErrorResponse {
            status: StatusCode::NOT_FOUND,
            body: serde_json::json!({"detail": "not found"}),
        };
        assert_eq!(error.to_string(), "API request returned error response");
        assert_eq!(error.detail(), Some("not found"));
    }

    #[tokio::test]
    async fn test_embedded_resource_short_circuits_network() {
        // Unroutable base URL: reaching the network would fail, so a
        // successful get proves the embedded payload was used.
        let api = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            session_cookie: String::new(),
        };
        let context = PageContext::parse(
            r#"<script type="application/resource+json">
            {"id": "m1", "title": "Embedded", "description": ""}
            </script>"#,
        );
        let client = ApiClient::new(&api, context).unwrap();

        let item = client.media_get("m1").await.unwrap();
        assert_eq!(item.title, "Embedded");

        // Second lookup for the same id must fall through to the network
        // and therefore fail here.
        assert!(client.media_get("m1").await.is_err());
    }

    #[tokio::test]
    async fn test_embedded_decode_failure_propagates() {
        let api = ApiConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            session_cookie: String::new(),
        };
        // Playlist requires an embedded channel; this payload has none.
        let context = PageContext::parse(
            r#"<script type="application/resource+json">
            {"id": "p1", "title": "Broken playlist"}
            </script>"#,
        );
        let client = ApiClient::new(&api, context).unwrap();
        assert!(matches!(
            client.playlist_get("p1").await,
            Err(ApiError::Decode(_))
        ));
    }
}
