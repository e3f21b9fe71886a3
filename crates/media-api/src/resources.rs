//! Wire shapes for the platform API.
//!
//! Every struct here is decoded from (or encoded to) the remote JSON API.
//! Field names on the wire are camelCase except where noted. Resources are
//! immutable snapshots: a fetch produces a value, nothing edits it in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A media download/playback source. One media item carries several of these
/// representing encoding and quality variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    pub mime_type: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Links to legacy parts of the platform attached to a media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaLinks {
    pub legacy_statistics_url: String,
}

/// An individual media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Media kind, e.g. "video" or "audio".
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub poster_image_url: String,
    /// Only present on detail responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<MediaSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<MediaLinks>,
    /// The owning channel, embedded on detail responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
}

// Identifiers are opaque; equality is by identifier only.
impl PartialEq for MediaItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Payload for creating a new media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItemCreate {
    pub title: String,
    pub description: String,
    pub language: String,
    pub copyright: String,
    pub tags: Vec<String>,
}

/// An upload target for a media item. Field names are snake_case on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaUpload {
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

/// An individual channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// URL of the media list for this channel.
    #[serde(default)]
    pub media_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// An individual playlist. Embeds its parent channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub channel: Channel,
    #[serde(default)]
    pub media_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PartialEq for Playlist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub is_anonymous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_image_url: Option<String>,
    /// Channels the user has edit rights on.
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl Profile {
    /// Whether this profile owns (can edit) the given channel.
    pub fn owns_channel(&self, channel: &Channel) -> bool {
        channel.id.is_some() && self.channels.iter().any(|c| c.id == channel.id)
    }
}

/// A paged list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total: u64,
}

/// Query parameters accepted by the list endpoints. `None` parameters are
/// omitted from the request entirely.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl ListQuery {
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ordering: None,
        }
    }

    /// Pairs for `reqwest::RequestBuilder::query`. `None` values are skipped
    /// during serialization, so absent parameters never reach the URL.
    pub(crate) fn pairs(&self) -> [(&'static str, Option<&str>); 2] {
        [
            ("search", self.search.as_deref()),
            ("ordering", self.ordering.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_item_equality_is_by_id() {
        let a: MediaItem = serde_json::from_value(serde_json::json!({
            "id": "x1", "title": "One", "description": "first"
        }))
        .unwrap();
        let b: MediaItem = serde_json::from_value(serde_json::json!({
            "id": "x1", "title": "Completely different", "description": ""
        }))
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_media_item_decodes_wire_names() {
        let item: MediaItem = serde_json::from_value(serde_json::json!({
            "id": "m1",
            "title": "Lecture 1",
            "description": "Intro",
            "duration": 3600.0,
            "type": "video",
            "publishedAt": "2018-03-22T16:00:00Z",
            "posterImageUrl": "https://cdn.invalid/poster.jpg",
            "sources": [
                {"mimeType": "video/mp4", "url": "https://cdn.invalid/v.mp4", "width": 1280, "height": 720}
            ]
        }))
        .unwrap();
        assert_eq!(item.kind, "video");
        assert_eq!(item.poster_image_url, "https://cdn.invalid/poster.jpg");
        let sources = item.sources.unwrap();
        assert_eq!(sources[0].mime_type, "video/mp4");
        assert_eq!(sources[0].width, Some(1280));
    }

    #[test]
    fn test_profile_owns_channel() {
        let owned: Channel = serde_json::from_value(serde_json::json!({
            "id": "c1", "title": "Owned"
        }))
        .unwrap();
        let other: Channel = serde_json::from_value(serde_json::json!({
            "id": "c2", "title": "Other"
        }))
        .unwrap();
        let profile = Profile {
            is_anonymous: false,
            username: Some("spqr1".into()),
            display_name: None,
            avatar_image_url: None,
            channels: vec![owned.clone()],
        };
        assert!(profile.owns_channel(&owned));
        assert!(!profile.owns_channel(&other));
    }

    #[test]
    fn test_anonymous_channel_never_owned() {
        // A channel with no id must not match anything.
        let anon: Channel = serde_json::from_value(serde_json::json!({"title": "t"})).unwrap();
        let profile = Profile {
            is_anonymous: true,
            username: None,
            display_name: None,
            avatar_image_url: None,
            channels: vec![anon.clone()],
        };
        assert!(!profile.owns_channel(&anon));
    }
}
