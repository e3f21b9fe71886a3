//! Page-embedded resource cache.
//!
//! The server inlines the resources needed for a page's first paint as
//! `<script type="application/resource+json">` payloads, plus at most one
//! `application/profile+json` payload and an anti-forgery token field. We
//! scan the start page once and serve get-by-id lookups from the result,
//! saving the redundant first-render round-trip.
//!
//! Resources are take-once: a second lookup for the same id falls through to
//! the network, so list-item data can never go stale within a session. The
//! profile has no such invalidation and is served for the whole page
//! lifetime. The asymmetry is deliberate.

use std::collections::HashMap;
use std::sync::Mutex;

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::resources::Profile;

/// Script MIME type marking an embedded, individually keyed resource.
pub const RESOURCE_SCRIPT_TYPE: &str = "application/resource+json";
/// Script MIME type marking the embedded profile payload.
pub const PROFILE_SCRIPT_TYPE: &str = "application/profile+json";

/// Everything extracted from the start page at startup.
pub struct PageContext {
    csrf_token: String,
    profile: Option<Profile>,
    // Lookup and removal must be one atomic step so no two readers can both
    // observe the same resource.
    resources: Mutex<HashMap<String, serde_json::Value>>,
}

impl PageContext {
    /// A context with no embedded data and an empty anti-forgery token.
    /// Every lookup falls through to the network.
    pub fn empty() -> Self {
        Self {
            csrf_token: String::new(),
            profile: None,
            resources: Mutex::new(HashMap::new()),
        }
    }

    /// Scan a page for embedded payloads and the anti-forgery token.
    ///
    /// Malformed payloads and resources without an `id` are skipped, never
    /// fatal: the worst outcome is an extra network fetch later.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let mut csrf_token = String::new();
        if let Ok(selector) = Selector::parse(r#"input[name="csrfmiddlewaretoken"]"#) {
            if let Some(input) = document.select(&selector).next() {
                csrf_token = input.value().attr("value").unwrap_or("").to_string();
            }
        }

        let mut resources = HashMap::new();
        let mut profile = None;
        if let Ok(selector) = Selector::parse("script") {
            for script in document.select(&selector) {
                let Some(script_type) = script.value().attr("type") else {
                    continue;
                };
                if script_type != RESOURCE_SCRIPT_TYPE && script_type != PROFILE_SCRIPT_TYPE {
                    continue;
                }
                let text: String = script.text().collect();
                let value: serde_json::Value = match serde_json::from_str(&text) {
                    Ok(v) => v,
                    Err(e) => {
                        warn!("skipping malformed embedded payload ({}): {}", script_type, e);
                        continue;
                    }
                };

                if script_type == PROFILE_SCRIPT_TYPE {
                    // First profile payload wins; the page embeds at most one.
                    if profile.is_none() {
                        match serde_json::from_value::<Profile>(value) {
                            Ok(p) => profile = Some(p),
                            Err(e) => warn!("skipping malformed embedded profile: {}", e),
                        }
                    }
                    continue;
                }

                match value.get("id").and_then(|id| id.as_str()) {
                    Some(id) => {
                        resources.insert(id.to_string(), value);
                    }
                    None => debug!("skipping embedded resource without id"),
                }
            }
        }

        debug!(
            "page context: {} embedded resource(s), profile {}",
            resources.len(),
            if profile.is_some() { "present" } else { "absent" },
        );

        Self {
            csrf_token,
            profile,
            resources: Mutex::new(resources),
        }
    }

    /// The anti-forgery token from the page, empty when absent.
    pub fn csrf_token(&self) -> &str {
        &self.csrf_token
    }

    /// The embedded profile. Unlike resources this is served on every call
    /// for the page lifetime.
    pub fn profile(&self) -> Option<Profile> {
        self.profile.clone()
    }

    /// Take an embedded resource by id, removing it from the table.
    ///
    /// Single-use: the second call for the same id returns `None` and the
    /// caller must fetch over the network instead.
    pub fn take_resource(&self, id: &str) -> Option<serde_json::Value> {
        self.resources
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(id)
    }

    /// Number of resources still held. Used by tests and diagnostics.
    pub fn resource_count(&self) -> usize {
        self.resources
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

/// Fetch the configured start page and parse it into a [`PageContext`].
///
/// Degrades to the empty context on any failure; the client then works
/// purely over the API with an empty anti-forgery token.
pub async fn fetch_page_context(api: &ApiConfig) -> PageContext {
    let client = reqwest::Client::new();
    let mut request = client.get(&api.base_url);
    if !api.session_cookie.is_empty() {
        request = request.header(reqwest::header::COOKIE, api.session_cookie.clone());
    }

    let html = match request.send().await {
        Ok(response) => match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!("could not read start page body: {}", e);
                return PageContext::empty();
            }
        },
        Err(e) => {
            warn!("could not fetch start page: {}", e);
            return PageContext::empty();
        }
    };

    PageContext::parse(&html)
}
