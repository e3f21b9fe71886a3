//! Resource-to-card mappers.
//!
//! Pure, total functions turning API resources into the flat shape the card
//! and list views consume. No side effects, no failure cases: a resource with
//! a missing id still maps to a card whose destination path simply ends in an
//! empty segment.

use crate::resources::{Channel, MediaItem, Playlist};

/// Image substituted for channels that carry no artwork of their own.
pub const CHANNEL_DEFAULT_IMAGE: &str = "/static/img/channel-default-image.jpg";
/// Image substituted for playlists that carry no artwork of their own.
pub const PLAYLIST_DEFAULT_IMAGE: &str = "/static/img/playlist-default-image.jpg";

/// The flat item shape consumed by card/list views. Derived per render,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CardItem {
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Destination path, `/<kind-plural>/<id>`.
    pub url: String,
    /// Small badge text ("Channel", "Playlist"); media items carry none.
    pub label: Option<String>,
}

/// Map a media item to a card. Uses the item's poster image.
pub fn media_item_card(item: &MediaItem) -> CardItem {
    CardItem {
        title: item.title.clone(),
        description: item.description.clone(),
        image_url: item.poster_image_url.clone(),
        url: format!("/media/{}", item.id.as_deref().unwrap_or("")),
        label: None,
    }
}

/// Map a channel to a card, substituting the default channel image.
pub fn channel_card(channel: &Channel) -> CardItem {
    CardItem {
        title: channel.title.clone(),
        description: channel.description.clone(),
        image_url: CHANNEL_DEFAULT_IMAGE.to_string(),
        url: format!("/channels/{}", channel.id.as_deref().unwrap_or("")),
        label: Some("Channel".to_string()),
    }
}

/// Map a playlist to a card, substituting the default playlist image.
pub fn playlist_card(playlist: &Playlist) -> CardItem {
    CardItem {
        title: playlist.title.clone(),
        description: playlist.description.clone(),
        image_url: PLAYLIST_DEFAULT_IMAGE.to_string(),
        url: format!("/playlists/{}", playlist.id.as_deref().unwrap_or("")),
        label: Some("Playlist".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: Option<&str>) -> Channel {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": "Engineering lectures",
            "description": "Recorded lectures"
        }))
        .unwrap()
    }

    #[test]
    fn test_channel_card_url_and_default_image() {
        let card = channel_card(&channel(Some("42")));
        assert_eq!(card.url, "/channels/42");
        assert_eq!(card.image_url, CHANNEL_DEFAULT_IMAGE);
        assert_eq!(card.label.as_deref(), Some("Channel"));
    }

    #[test]
    fn test_missing_id_maps_to_empty_segment() {
        let card = channel_card(&channel(None));
        assert_eq!(card.url, "/channels/");
    }

    #[test]
    fn test_playlist_card() {
        let playlist: Playlist = serde_json::from_value(serde_json::json!({
            "id": "p7",
            "title": "Week one",
            "description": "",
            "channel": {"id": "42", "title": "Engineering lectures"}
        }))
        .unwrap();
        let card = playlist_card(&playlist);
        assert_eq!(card.url, "/playlists/p7");
        assert_eq!(card.image_url, PLAYLIST_DEFAULT_IMAGE);
        assert_eq!(card.label.as_deref(), Some("Playlist"));
    }

    #[test]
    fn test_media_card_uses_poster_and_no_label() {
        let item: MediaItem = serde_json::from_value(serde_json::json!({
            "id": "m3",
            "title": "Lecture 3",
            "description": "Heat transfer",
            "posterImageUrl": "https://cdn.invalid/m3.jpg"
        }))
        .unwrap();
        let card = media_item_card(&item);
        assert_eq!(card.url, "/media/m3");
        assert_eq!(card.image_url, "https://cdn.invalid/m3.jpg");
        assert!(card.label.is_none());
    }
}
