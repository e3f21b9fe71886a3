//! AppState — shared read-only data passed to all components during
//! render/event handling.
//!
//! Components read this but never mutate it. The App event-loop is the only
//! writer, and every network result passes through it, so a component can
//! never observe a half-applied fetch.

use media_api::analytics::DailyViews;
use media_api::resources::{MediaItem, Profile};

use crate::action::Page;
use crate::widgets::status_bar::InputMode;

/// How loudly the status line should speak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Info,
    Error,
}

/// The full shared state of the application.
pub struct AppState {
    // ── Session ─────────────────────────────────────────────────────────────
    /// Site root, used to build embed codes and absolute links.
    pub base_url: String,
    pub profile: Option<Profile>,

    // ── Page ────────────────────────────────────────────────────────────────
    pub page: Page,
    /// A fetch for the current page is still in flight.
    pub loading: bool,
    pub input_mode: InputMode,

    // ── Page data ───────────────────────────────────────────────────────────
    /// Active search query, if any. `None` means no search section.
    pub search_query: Option<String>,
    /// Heading for listing pages (e.g. the channel title once loaded).
    pub listing_title: Option<String>,
    /// The media item shown on Media/Analytics pages.
    pub media_item: Option<MediaItem>,
    /// Aggregated per-day series for the Analytics page. `None` while
    /// loading; an empty series means the item has had no views.
    pub analytics: Option<Vec<DailyViews>>,

    // ── Status line ─────────────────────────────────────────────────────────
    /// Transient message shown in the status bar (errors, copy/upload
    /// confirmations). Cleared on the next navigation.
    pub status: Option<(Severity, String)>,
}

impl AppState {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            profile: None,
            page: Page::Home,
            loading: false,
            input_mode: InputMode::Normal,
            search_query: None,
            listing_title: None,
            media_item: None,
            analytics: None,
            status: None,
        }
    }

    /// Display name for the signed-in user, if any.
    pub fn profile_name(&self) -> Option<&str> {
        let profile = self.profile.as_ref()?;
        if profile.is_anonymous {
            return None;
        }
        profile
            .display_name
            .as_deref()
            .or(profile.username.as_deref())
    }

    /// Whether the signed-in user owns the channel of the current media item.
    pub fn owns_current_media(&self) -> bool {
        let (Some(profile), Some(item)) = (self.profile.as_ref(), self.media_item.as_ref()) else {
            return false;
        };
        item.channel
            .as_ref()
            .map(|channel| profile.owns_channel(channel))
            .unwrap_or(false)
    }
}
