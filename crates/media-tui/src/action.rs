//! Action enum — all user-initiated intents, plus page identity.

use std::path::PathBuf;

/// Unique identifier for a focusable component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    Header,
    MediaList,
    MediaDetail,
    AnalyticsPanel,
}

/// Which page is being shown. Mirrors the platform's URL scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Latest media plus search results.
    Home,
    Channels,
    Playlists,
    /// One channel's media collection.
    Channel(String),
    /// One playlist's media collection.
    Playlist(String),
    /// One media item by id.
    Media(String),
    /// The analytics chart for one media item.
    Analytics(String),
}

impl Page {
    /// Resolve a card destination path (`/media/<id>`, `/channels/<id>`,
    /// `/playlists/<id>`) to a page. Unknown paths go Home.
    pub fn from_card_url(url: &str) -> Page {
        let mut segments = url.trim_start_matches('/').splitn(2, '/');
        let kind = segments.next().unwrap_or("");
        let id = segments.next().unwrap_or("").to_string();
        match kind {
            "media" => Page::Media(id),
            "channels" => Page::Channel(id),
            "playlists" => Page::Playlist(id),
            _ => Page::Home,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Latest media",
            Page::Channels => "Channels",
            Page::Playlists => "Playlists",
            Page::Channel(_) => "Channel",
            Page::Playlist(_) => "Playlist",
            Page::Media(_) => "Media",
            Page::Analytics(_) => "Analytics",
        }
    }

    /// Whether this page renders as a card list.
    pub fn is_listing(&self) -> bool {
        matches!(
            self,
            Page::Home
                | Page::Channels
                | Page::Playlists
                | Page::Channel(_)
                | Page::Playlist(_)
        )
    }
}

/// All actions that can flow through the system.
/// Components produce Actions; the App dispatches them.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Navigation ───────────────────────────────────────────────────────────
    Navigate(Page),
    Back,

    // ── Search ───────────────────────────────────────────────────────────────
    OpenSearch,
    SubmitSearch(String),
    CloseSearch,

    // ── Media actions ────────────────────────────────────────────────────────
    OpenAnalytics,
    CopyEmbedCode,
    CopySourceUrl,
    OpenEditPrompt,
    SubmitEdit(String),

    // ── Upload ───────────────────────────────────────────────────────────────
    OpenUploadPrompt,
    Upload(PathBuf),

    // ── Prompts ──────────────────────────────────────────────────────────────
    ClosePrompt,

    // ── System ───────────────────────────────────────────────────────────────
    Refresh,
    ShowStatus(String),
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_url_routing() {
        assert_eq!(Page::from_card_url("/media/m1"), Page::Media("m1".into()));
        assert_eq!(
            Page::from_card_url("/channels/42"),
            Page::Channel("42".into())
        );
        assert_eq!(
            Page::from_card_url("/playlists/p7"),
            Page::Playlist("p7".into())
        );
        // A card mapped from a resource without an id keeps its shape.
        assert_eq!(Page::from_card_url("/media/"), Page::Media(String::new()));
        assert_eq!(Page::from_card_url("/elsewhere"), Page::Home);
    }
}
